//! Button actions of the helper page, over abstract clipboard and text boxes.
//!
//! The page itself (DOM, tabs, event wiring) lives outside this crate. A
//! [`Session`] owns a [`Clipboard`] and a set of [`TextSurfaces`] and runs
//! the same steps each button runs, so the orchestration can be tested with
//! in-memory fakes.

use pistes_analysis::{AnalysisError, analyze};
use pistes_format::render_hints;
use pistes_merge::merge_to_string;
use pistes_settings::{PistesSettings, SettingsError};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard access was denied")]
    PermissionDenied,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no clipboard input: {0}")]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Plain-text system clipboard.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Text boxes of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurfaceId {
    Player1Name,
    Player1Words,
    Player2Name,
    Player2Words,
    WordList,
    MergeResult,
    HintsResult,
}

/// Readable and writable text boxes, addressed by [`SurfaceId`].
pub trait TextSurfaces {
    /// Current contents; an untouched surface reads as empty.
    fn get(&self, id: SurfaceId) -> String;
    fn set(&mut self, id: SurfaceId, text: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn words_surface(self) -> SurfaceId {
        match self {
            Player::One => SurfaceId::Player1Words,
            Player::Two => SurfaceId::Player2Words,
        }
    }

    pub fn name_surface(self) -> SurfaceId {
        match self {
            Player::One => SurfaceId::Player1Name,
            Player::Two => SurfaceId::Player2Name,
        }
    }
}

/// One page's worth of state: clipboard, text boxes and settings.
#[derive(Debug)]
pub struct Session<C, S> {
    clipboard: C,
    surfaces: S,
    settings: PistesSettings,
}

impl<C: Clipboard, S: TextSurfaces> Session<C, S> {
    pub fn new(clipboard: C, surfaces: S) -> Self {
        Self::with_settings(clipboard, surfaces, PistesSettings::default())
    }

    pub fn with_settings(clipboard: C, surfaces: S, settings: PistesSettings) -> Self {
        Self {
            clipboard,
            surfaces,
            settings,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn settings(&self) -> &PistesSettings {
        &self.settings
    }

    pub fn into_parts(self) -> (C, S) {
        (self.clipboard, self.surfaces)
    }

    fn read_clipboard(&mut self) -> Result<String, SessionError> {
        self.clipboard.read_text().map_err(|err| {
            warn!(error = %err, "clipboard read failed");
            SessionError::Clipboard(err)
        })
    }

    /// Paste the clipboard, URI-decoded, into `player`'s word box.
    pub fn paste_results_for_player(&mut self, player: Player) -> Result<(), SessionError> {
        let text = self.read_clipboard()?;
        self.surfaces.set(player.words_surface(), decode_uri(&text));
        debug!(?player, "pasted player results");
        Ok(())
    }

    /// Merge both players' boxes into the result box and copy the result.
    ///
    /// A failed copy is logged and does not undo the merge.
    pub fn merge_results(&mut self) -> Result<String, SessionError> {
        let result = merge_to_string(
            &self.surfaces.get(Player::One.words_surface()),
            &self.surfaces.get(Player::Two.words_surface()),
            &self.surfaces.get(Player::One.name_surface()),
            &self.surfaces.get(Player::Two.name_surface()),
            &self.settings.merge,
        );
        self.surfaces.set(SurfaceId::MergeResult, result.clone());

        if let Err(err) = self.clipboard.write_text(&decode_uri(&result)) {
            warn!(error = %err, "could not copy merge result");
        }
        Ok(result)
    }

    /// Paste the clipboard into the word-list box and derive hints from it.
    pub fn paste_and_find_hints(&mut self) -> Result<String, SessionError> {
        let text = self.read_clipboard()?;
        self.surfaces.set(SurfaceId::WordList, text);
        self.find_hints()
    }

    /// Derive hints from the word-list box into the hints box.
    ///
    /// Out-of-range hint settings are rejected before anything is written.
    pub fn find_hints(&mut self) -> Result<String, SessionError> {
        self.settings.hints.validate()?;
        let words = self.surfaces.get(SurfaceId::WordList);
        let report = analyze(&words, &self.settings.hints)?;
        let text = render_hints(&report, &self.settings.hints);
        self.surfaces.set(SurfaceId::HintsResult, text.clone());
        Ok(text)
    }
}

// ---------------------
// URI decoding
// ---------------------

/// Characters whose escapes `decodeURI` keeps encoded.
const RESERVED: &str = ";/?:@&=+$,#";

fn escaped_byte(bytes: &[u8], at: usize) -> Option<u8> {
    if bytes.get(at) != Some(&b'%') {
        return None;
    }
    let hi = char::from(*bytes.get(at + 1)?).to_digit(16)?;
    let lo = char::from(*bytes.get(at + 2)?).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

/// Decode one `%XX` sequence (up to four escapes for a UTF-8 character).
/// Returns the character and the number of input bytes consumed.
fn decode_escape(bytes: &[u8], at: usize) -> Option<(char, usize)> {
    let lead = escaped_byte(bytes, at)?;
    let width = match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let mut buf = [0u8; 4];
    buf[0] = lead;
    for (k, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
        *slot = escaped_byte(bytes, at + 3 * k)?;
    }
    let c = std::str::from_utf8(&buf[..width]).ok()?.chars().next()?;
    Some((c, 3 * width))
}

/// Percent-decode `text` like JavaScript's `decodeURI`.
///
/// Escapes of reserved characters (`;/?:@&=+$,#`) stay encoded. Malformed
/// escapes and invalid UTF-8 are left as they are instead of failing.
pub fn decode_uri(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some((c, len)) = decode_escape(bytes, i) {
            if !RESERVED.contains(c) {
                out.push_str(&text[copied..i]);
                out.push(c);
                copied = i + len;
            }
            i += len;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[copied..]);
    out
}
