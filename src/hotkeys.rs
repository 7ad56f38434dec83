//! Hotkey representation, parsing, and YAML persistence.
//!
//! A hotkey is an optional modifier plus a key: either a printable character
//! or one of the named keys the ruler relies on (Enter, Escape). Bindings can
//! be saved to and restored from `~/.frameruler/hotkeys.yaml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Modifier keys used for hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

/// The key part of a hotkey: a printable character or a named key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeySpec {
    Char(char),
    Enter,
    Escape,
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::Char(c) => write!(f, "{}", c),
            KeySpec::Enter => write!(f, "Enter"),
            KeySpec::Escape => write!(f, "Esc"),
        }
    }
}

/// A single hotkey consisting of an optional modifier and a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: KeySpec,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: KeySpec) -> Self {
        Self { modifier, key }
    }

    /// Plain (unmodified) character hotkey.
    pub fn ch(c: char) -> Self {
        Self::new(Modifier::None, KeySpec::Char(c))
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;

    /// Accepts formats like `"Ctrl+K"`, `"Enter"`, `"Esc"`, or `"+"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        // A trailing '+' is the key itself, not a separator.
        let (mods_part, key_part) = match s.rfind('+') {
            Some(i) if i + 1 < s.len() => (&s[..i], &s[i + 1..]),
            _ if s.ends_with('+') && s.len() > 1 => (&s[..s.len() - 1], "+"),
            _ => ("", s),
        };

        let key = parse_key(key_part)?;
        let mut ctrl = false;
        let mut alt = false;
        let mut shift = false;
        for m in mods_part.split('+').filter(|m| !m.trim().is_empty()) {
            match m.trim().to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => shift = true,
                other => return Err(format!("unknown modifier '{}'", other)),
            }
        }
        let modifier = match (ctrl, alt, shift) {
            (false, false, false) => Modifier::None,
            (true, false, false) => Modifier::Ctrl,
            (false, true, false) => Modifier::Alt,
            (false, false, true) => Modifier::Shift,
            (true, false, true) => Modifier::CtrlShift,
            _ => return Err(format!("unsupported modifier combo in '{}'", s)),
        };
        Ok(Hotkey { modifier, key })
    }
}

fn parse_key(s: &str) -> Result<KeySpec, String> {
    let t = s.trim();
    match t.to_lowercase().as_str() {
        "enter" | "return" => return Ok(KeySpec::Enter),
        "esc" | "escape" => return Ok(KeySpec::Escape),
        _ => {}
    }
    let mut chars = t.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeySpec::Char(c)),
        _ => Err(format!("invalid key '{}'", s)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hotkeys – the full binding set
// ─────────────────────────────────────────────────────────────────────────────

/// Container for all configurable hotkeys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotkeys {
    /// Clear the in-progress point pair.
    pub clear_pending: Hotkey,
    /// Clear pending points and all stored measurements.
    pub clear_all: Hotkey,
    /// Enter calibration mode.
    pub calibrate: Hotkey,
    /// Toggle pixel / physical-unit display.
    pub toggle_units: Hotkey,
    /// Confirm the collected calibration pair.
    pub confirm_calibration: Hotkey,
    /// Increase the calibration reference length.
    pub increase_reference: Hotkey,
    /// Decrease the calibration reference length.
    pub decrease_reference: Hotkey,
    /// Save a PNG snapshot of the window.
    pub save_snapshot: Hotkey,
    /// End the session.
    pub quit: Hotkey,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            clear_pending: Hotkey::ch('c'),
            clear_all: Hotkey::ch('r'),
            calibrate: Hotkey::ch('k'),
            toggle_units: Hotkey::ch('t'),
            confirm_calibration: Hotkey::new(Modifier::None, KeySpec::Enter),
            increase_reference: Hotkey::ch('+'),
            decrease_reference: Hotkey::ch('-'),
            save_snapshot: Hotkey::ch('s'),
            quit: Hotkey::new(Modifier::None, KeySpec::Escape),
        }
    }
}

impl Hotkeys {
    pub fn reset_defaults(&mut self) {
        *self = Hotkeys::default();
    }

    fn default_path() -> Result<PathBuf, String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        Ok(PathBuf::from(home).join(".frameruler").join("hotkeys.yaml"))
    }

    /// Save hotkeys to the default path `~/.frameruler/hotkeys.yaml`.
    pub fn save_to_default_path(&self) -> Result<(), String> {
        let path = Self::default_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| format!("Failed to create dir {:?}: {}", dir, e))?;
        }
        let s = serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?;
        let mut f = fs::File::create(&path)
            .map_err(|e| format!("Failed to create file {:?}: {}", path, e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| format!("Failed to write file {:?}: {}", path, e))?;
        Ok(())
    }

    /// Load hotkeys from `~/.frameruler/hotkeys.yaml` if present.
    pub fn load_from_default_path() -> Result<Hotkeys, String> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Err(format!("Hotkeys file {:?} does not exist", path));
        }
        let s =
            fs::read_to_string(&path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        serde_yaml::from_str(&s).map_err(|e| format!("Deserialization error: {}", e))
    }
}
