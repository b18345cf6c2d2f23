//! Button actions
//!
//! A button is mapped to exactly one [`ButtonAction`]. Actions are parsed from
//! the command line as a kind (`button`, `key`, `special`, `macro`) plus one
//! argument, and stored in device descriptions in tagged TOML form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::keys;

/// Errors from parsing a button action on the command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// Action kind is not one of button/key/special/macro
    #[error("Invalid action type '{0}'")]
    InvalidKind(String),

    /// Logical button number is not a number
    #[error("Invalid button number '{0}'")]
    InvalidButton(String),

    /// Unknown key name
    #[error("Failed to resolve key {0}")]
    UnknownKey(String),

    /// Unknown special action
    #[error("Invalid special command '{0}'")]
    InvalidSpecial(String),

    /// Malformed macro definition
    #[error("Invalid macro '{0}', expected name:KEY_FOO,KEY_BAR,...")]
    InvalidMacro(String),
}

/// Special (non-key, non-button) actions a device can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialAction {
    Doubleclick,
    WheelLeft,
    WheelRight,
    WheelUp,
    WheelDown,
    RatchetModeSwitch,
    ResolutionCycleUp,
    ResolutionCycleDown,
    ResolutionUp,
    ResolutionDown,
    ResolutionAlternate,
    ResolutionDefault,
    ProfileCycleUp,
    ProfileCycleDown,
    ProfileUp,
    ProfileDown,
    SecondMode,
    BatteryLevel,
}

const SPECIAL_NAMES: &[(&str, SpecialAction)] = &[
    ("doubleclick", SpecialAction::Doubleclick),
    ("wheel-left", SpecialAction::WheelLeft),
    ("wheel-right", SpecialAction::WheelRight),
    ("wheel-up", SpecialAction::WheelUp),
    ("wheel-down", SpecialAction::WheelDown),
    ("ratchet-mode-switch", SpecialAction::RatchetModeSwitch),
    ("resolution-cycle-up", SpecialAction::ResolutionCycleUp),
    ("resolution-cycle-down", SpecialAction::ResolutionCycleDown),
    ("resolution-up", SpecialAction::ResolutionUp),
    ("resolution-down", SpecialAction::ResolutionDown),
    ("resolution-alternate", SpecialAction::ResolutionAlternate),
    ("resolution-default", SpecialAction::ResolutionDefault),
    ("profile-cycle-up", SpecialAction::ProfileCycleUp),
    ("profile-cycle-down", SpecialAction::ProfileCycleDown),
    ("profile-up", SpecialAction::ProfileUp),
    ("profile-down", SpecialAction::ProfileDown),
    ("second-mode", SpecialAction::SecondMode),
    ("battery-level", SpecialAction::BatteryLevel),
];

impl SpecialAction {
    /// Command-line name of this special action
    pub fn as_str(self) -> &'static str {
        SPECIAL_NAMES
            .iter()
            .find(|(_, action)| *action == self)
            .map_or("unknown", |(name, _)| name)
    }
}

impl FromStr for SpecialAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SPECIAL_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, action)| *action)
            .ok_or_else(|| ActionError::InvalidSpecial(s.to_string()))
    }
}

impl fmt::Display for SpecialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a macro key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacroEventKind {
    Pressed,
    Released,
}

/// One step of a key macro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroEvent {
    /// Press or release
    pub kind: MacroEventKind,
    /// Key name (`KEY_*`)
    pub key: String,
}

/// What a button does when pressed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ButtonAction {
    /// Button is disabled
    #[default]
    None,
    /// Acts as logical mouse button N
    Button { button: u32 },
    /// Sends a key
    Key { key: String },
    /// Performs a device-specific special function
    Special { special: SpecialAction },
    /// Plays back a named key sequence
    Macro { name: String, events: Vec<MacroEvent> },
}

impl ButtonAction {
    /// Parse an action from its command-line kind and argument
    ///
    /// `kind` is one of `button`, `key`, `special` or `macro`. Macros are
    /// written as `name:KEY_FOO,KEY_BAR,...` and expand to a press and release
    /// for each key in order.
    pub fn parse(kind: &str, arg: &str) -> Result<Self, ActionError> {
        match kind {
            "button" => arg
                .parse::<u32>()
                .map(|button| Self::Button { button })
                .map_err(|_| ActionError::InvalidButton(arg.to_string())),
            "key" => {
                if keys::is_known(arg) {
                    Ok(Self::Key {
                        key: arg.to_string(),
                    })
                } else {
                    Err(ActionError::UnknownKey(arg.to_string()))
                }
            }
            "special" => arg.parse().map(|special| Self::Special { special }),
            "macro" => parse_macro(arg),
            other => Err(ActionError::InvalidKind(other.to_string())),
        }
    }

    /// Whether this action is a key macro
    pub fn is_macro(&self) -> bool {
        matches!(self, Self::Macro { .. })
    }
}

fn parse_macro(arg: &str) -> Result<ButtonAction, ActionError> {
    let invalid = || ActionError::InvalidMacro(arg.to_string());

    let (name, keys_list) = arg.split_once(':').ok_or_else(invalid)?;
    if name.is_empty() || keys_list.is_empty() {
        return Err(invalid());
    }

    let mut events = Vec::new();
    for key in keys_list.split(',') {
        if !keys::is_known(key) {
            return Err(ActionError::UnknownKey(key.to_string()));
        }
        events.push(MacroEvent {
            kind: MacroEventKind::Pressed,
            key: key.to_string(),
        });
        events.push(MacroEvent {
            kind: MacroEventKind::Released,
            key: key.to_string(),
        });
    }

    Ok(ButtonAction::Macro {
        name: name.to_string(),
        events,
    })
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Button { button } => write!(f, "button {button}"),
            Self::Key { key } => write!(f, "key {key}"),
            Self::Special { special } => write!(f, "special {special}"),
            Self::Macro { name, events } => {
                write!(f, "macro {name}:")?;
                for event in events {
                    let sign = match event.kind {
                        MacroEventKind::Pressed => '+',
                        MacroEventKind::Released => '-',
                    };
                    write!(f, " {sign}{}", event.key)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_button() {
        assert_eq!(
            ButtonAction::parse("button", "3").unwrap(),
            ButtonAction::Button { button: 3 }
        );
        assert_eq!(
            ButtonAction::parse("button", "three"),
            Err(ActionError::InvalidButton("three".to_string()))
        );
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            ButtonAction::parse("key", "KEY_VOLUMEUP").unwrap(),
            ButtonAction::Key {
                key: "KEY_VOLUMEUP".to_string()
            }
        );
        assert!(matches!(
            ButtonAction::parse("key", "KEY_NOPE"),
            Err(ActionError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_parse_special() {
        assert_eq!(
            ButtonAction::parse("special", "resolution-up").unwrap(),
            ButtonAction::Special {
                special: SpecialAction::ResolutionUp
            }
        );
        assert!(ButtonAction::parse("special", "fly").is_err());
    }

    #[test]
    fn test_parse_macro_expands_press_release_pairs() {
        let action = ButtonAction::parse("macro", "foo:KEY_F,KEY_O,KEY_O").unwrap();
        let ButtonAction::Macro { name, events } = action else {
            panic!("expected a macro");
        };
        assert_eq!(name, "foo");
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].kind, MacroEventKind::Pressed);
        assert_eq!(events[1].kind, MacroEventKind::Released);
        assert_eq!(events[2].key, "KEY_O");
    }

    #[test]
    fn test_parse_macro_rejects_malformed() {
        assert!(matches!(
            ButtonAction::parse("macro", "foo"),
            Err(ActionError::InvalidMacro(_))
        ));
        assert!(matches!(
            ButtonAction::parse("macro", ":KEY_A"),
            Err(ActionError::InvalidMacro(_))
        ));
        assert!(matches!(
            ButtonAction::parse("macro", "foo:KEY_A,KEY_BOGUS"),
            Err(ActionError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            ButtonAction::parse("laser", "1"),
            Err(ActionError::InvalidKind("laser".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ButtonAction::None.to_string(), "none");
        assert_eq!(ButtonAction::Button { button: 2 }.to_string(), "button 2");
        assert_eq!(
            ButtonAction::parse("macro", "ab:KEY_A,KEY_B")
                .unwrap()
                .to_string(),
            "macro ab: +KEY_A -KEY_A +KEY_B -KEY_B"
        );
    }

    #[test]
    fn test_special_names_roundtrip() {
        for (name, action) in SPECIAL_NAMES {
            assert_eq!(action.as_str(), *name);
            assert_eq!(name.parse::<SpecialAction>().unwrap(), *action);
        }
    }
}
