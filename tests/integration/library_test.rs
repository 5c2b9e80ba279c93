//! Library-level replay tests against fixture files

use castshot::asciicast::Version;
use castshot::{export, AnsiRenderer, Color, ExportOptions, Player, Recording, Verbosity};

use super::helpers::fixture;

#[test]
fn fixture_replay_builds_expected_grid() {
    let recording = Recording::parse(fixture("demo_v1.cast")).unwrap();
    assert_eq!(recording.version, Version::One);
    assert_eq!((recording.width, recording.height), (12, 4));

    let mut player = Player::new(recording.width, recording.height, Verbosity::Quiet);
    let outcome = player.replay_until(&recording.frames, 3.0);
    assert_eq!(outcome.frames_applied, 3);

    let buffer = player.buffer();
    assert_eq!(buffer.row_text(0).unwrap(), "$ ls        ");
    assert_eq!(buffer.row_text(1).unwrap(), "a.txt [b]   ");
    assert_eq!(buffer.row_text(2).unwrap(), "cost $5     ");
    assert_eq!(buffer.cell(0, 0).unwrap().color, Color::Indexed(2));
    assert_eq!(buffer.cell(0, 2).unwrap().color, Color::Rgb(10, 20, 30));
    assert_eq!(buffer.cursor(), (0, 3));
}

#[test]
fn fixture_replay_past_clear() {
    let recording = Recording::parse(fixture("demo_v1.cast")).unwrap();
    let mut renderer = AnsiRenderer::new(Vec::new());
    let outcome = export(
        &recording,
        &ExportOptions {
            timestamp: Some(10.0),
            ..Default::default()
        },
        &mut renderer,
    )
    .unwrap();
    assert_eq!(outcome.frames_applied, 4);
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text, "            \n            \n            \n            \n");
}
