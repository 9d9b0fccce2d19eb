//! Session actions against in-memory clipboard and text boxes.

use std::collections::HashMap;

use pistes_core::session::{
    Clipboard, ClipboardError, Player, Session, SessionError, SurfaceId, TextSurfaces,
};
use pistes_core::settings::{MalformedPolicy, MergeLabeling, PistesSettings};

#[derive(Debug, Default)]
struct FakeClipboard {
    contents: Option<String>,
    writes: Vec<String>,
    fail_writes: bool,
}

impl FakeClipboard {
    fn with(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn broken() -> Self {
        Self::default()
    }
}

impl Clipboard for FakeClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.contents
            .clone()
            .ok_or_else(|| ClipboardError::Unavailable("no permission".to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes {
            return Err(ClipboardError::PermissionDenied);
        }
        self.writes.push(text.to_string());
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct FakeSurfaces(HashMap<SurfaceId, String>);

impl FakeSurfaces {
    fn with(entries: &[(SurfaceId, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(id, text)| (*id, (*text).to_string()))
                .collect(),
        )
    }
}

impl TextSurfaces for FakeSurfaces {
    fn get(&self, id: SurfaceId) -> String {
        self.0.get(&id).cloned().unwrap_or_default()
    }

    fn set(&mut self, id: SurfaceId, text: String) {
        self.0.insert(id, text);
    }
}

#[test]
fn paste_results_decodes_into_player_box() {
    let mut session = Session::new(
        FakeClipboard::with("ca%C3%A7a, babal%C3%A0"),
        FakeSurfaces::default(),
    );
    session.paste_results_for_player(Player::Two).unwrap();
    assert_eq!(
        session.surfaces().get(SurfaceId::Player2Words),
        "caça, babalà"
    );
    assert_eq!(session.surfaces().get(SurfaceId::Player1Words), "");
}

#[test]
fn paste_with_unavailable_clipboard_leaves_boxes_untouched() {
    let before = FakeSurfaces::with(&[(SurfaceId::Player1Words, "casa, gos")]);
    let mut session = Session::new(FakeClipboard::broken(), before.clone());

    let err = session.paste_results_for_player(Player::One).unwrap_err();
    assert!(matches!(err, SessionError::Clipboard(_)));
    assert_eq!(session.surfaces(), &before);

    let err = session.paste_and_find_hints().unwrap_err();
    assert!(matches!(err, SessionError::Clipboard(_)));
    assert_eq!(session.surfaces(), &before);
}

#[test]
fn merge_results_fills_result_box_and_copies_it() {
    let surfaces = FakeSurfaces::with(&[
        (SurfaceId::Player1Name, "Anna"),
        (SurfaceId::Player1Words, "casa, gos, peix."),
        (SurfaceId::Player2Name, "Pau"),
        (SurfaceId::Player2Words, "casa, gat"),
    ]);
    let mut session = Session::new(FakeClipboard::default(), surfaces);

    let result = session.merge_results().unwrap();
    assert_eq!(result, "Anna: gos, peix\n\nPau: gat");
    assert_eq!(session.surfaces().get(SurfaceId::MergeResult), result);
    assert_eq!(session.clipboard().writes, vec![result]);
}

#[test]
fn merge_results_survives_failed_copy() {
    let surfaces = FakeSurfaces::with(&[
        (SurfaceId::Player1Words, "casa"),
        (SurfaceId::Player2Words, "gat"),
    ]);
    let clipboard = FakeClipboard {
        fail_writes: true,
        ..FakeClipboard::default()
    };
    let mut session = Session::new(clipboard, surfaces);

    let result = session.merge_results().unwrap();
    assert_eq!(result, ": casa\n\n: gat");
    assert_eq!(session.surfaces().get(SurfaceId::MergeResult), result);
    assert!(session.clipboard().writes.is_empty());
}

#[test]
fn merge_results_honours_labeling_setting() {
    let mut settings = PistesSettings::default();
    settings.merge.labeling = MergeLabeling::MissingFromSelf;
    let surfaces = FakeSurfaces::with(&[
        (SurfaceId::Player1Name, "A"),
        (SurfaceId::Player1Words, "casa, gos"),
        (SurfaceId::Player2Name, "B"),
        (SurfaceId::Player2Words, "casa"),
    ]);
    let mut session = Session::with_settings(FakeClipboard::default(), surfaces, settings);
    assert_eq!(session.merge_results().unwrap(), "A: \n\nB: gos");
}

#[test]
fn paste_and_find_hints_keeps_raw_text_and_renders_hints() {
    let mut session = Session::new(FakeClipboard::with("casa, gos, peix."), FakeSurfaces::default());
    let hints = session.paste_and_find_hints().unwrap();

    let (_, surfaces) = session.into_parts();
    assert_eq!(surfaces.get(SurfaceId::WordList), "casa, gos, peix.");
    assert_eq!(surfaces.get(SurfaceId::HintsResult), hints);
    assert!(hints.starts_with("Has trobat 3 paraules"));
}

#[test]
fn find_hints_with_abort_policy_surfaces_analysis_error() {
    let mut settings = PistesSettings::default();
    settings.hints.malformed = MalformedPolicy::Abort;
    let surfaces = FakeSurfaces::with(&[(SurfaceId::WordList, "casa, i o")]);
    let mut session = Session::with_settings(FakeClipboard::default(), surfaces, settings);

    let err = session.find_hints().unwrap_err();
    assert!(matches!(err, SessionError::Analysis(_)));
    assert_eq!(session.surfaces().get(SurfaceId::HintsResult), "");
}

#[test]
fn find_hints_rejects_out_of_range_settings() {
    let mut settings = PistesSettings::default();
    settings.hints.top_percent = 150;
    let surfaces = FakeSurfaces::with(&[(SurfaceId::WordList, "casa, gos")]);
    let mut session = Session::with_settings(FakeClipboard::with("casa"), surfaces, settings);

    let err = session.find_hints().unwrap_err();
    assert!(matches!(err, SessionError::Settings(_)));
    assert!(err.to_string().contains("hints.top_percent"));
    assert_eq!(session.surfaces().get(SurfaceId::HintsResult), "");

    let err = session.paste_and_find_hints().unwrap_err();
    assert!(matches!(err, SessionError::Settings(_)));
    assert_eq!(session.surfaces().get(SurfaceId::HintsResult), "");
}
