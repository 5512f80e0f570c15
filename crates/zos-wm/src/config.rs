//! Window manager configuration
//!
//! Every field has a default, so a configuration document only needs to
//! name the settings it changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{WmError, WmResult};
use crate::math::Size;
use crate::policy::ClassActions;
use crate::types::{MAX_LAYER, MIN_LAYER};

/// Border colour of the focused client (black)
pub const DEFAULT_FOCUSED_BORDER: u32 = 0x000000;

/// Border colour of unfocused clients (white)
pub const DEFAULT_UNFOCUSED_BORDER: u32 = 0xFFFFFF;

/// Configuration for a [`ClientManager`](crate::ClientManager)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// Border width applied to every client, in pixels
    pub border_width: u32,
    /// Border colour of the focused client
    pub focused_border: u32,
    /// Border colour of unfocused clients
    pub unfocused_border: u32,
    /// Size of the root window
    pub screen: Size,
    /// Size of one icon in the icon bar
    pub icon_size: Size,
    /// Number of desktops (1-based)
    pub desktops: u32,
    /// Actions keyed by window class name
    pub actions: BTreeMap<String, ClassActions>,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            border_width: 4,
            focused_border: DEFAULT_FOCUSED_BORDER,
            unfocused_border: DEFAULT_UNFOCUSED_BORDER,
            screen: Size::new(1920, 1080),
            icon_size: Size::new(75, 20),
            desktops: 5,
            actions: BTreeMap::new(),
        }
    }
}

impl WmConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> WmResult<Self> {
        let config: WmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> WmResult<()> {
        if self.desktops == 0 {
            return Err(WmError::invalid_setting("desktops", "must be at least 1"));
        }
        if self.icon_size.height >= self.screen.height {
            return Err(WmError::invalid_setting(
                "icon_size",
                "icon bar must be shorter than the screen",
            ));
        }

        for (class, actions) in &self.actions {
            if let Some(layer) = actions.layer {
                if !(MIN_LAYER..=MAX_LAYER).contains(&layer) {
                    return Err(WmError::LayerOutOfRange {
                        class: class.clone(),
                        layer,
                        min: MIN_LAYER,
                        max: MAX_LAYER,
                    });
                }
            }
        }

        Ok(())
    }

    /// Actions registered for a window class, if any
    pub fn actions_for(&self, class: &str) -> Option<&ClassActions> {
        self.actions.get(class)
    }
}
