use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ValueEnum)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ApplicationIdentifier {
    #[serde(alias = "class")]
    Class,
    #[serde(alias = "process")]
    Process,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Identifier which excluded a window from tiling
pub struct IgnoreMatch {
    /// Kind of identifier that matched
    pub kind: ApplicationIdentifier,
    /// Entry that matched
    pub id: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Windows matching these identifiers are never placed under tiling control
pub struct IgnoreRules {
    /// Window class names which should never be managed
    pub window_classes: Vec<String>,
    /// Process image names which should never be managed
    pub processes: Vec<String>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            window_classes: vec![
                // Tray on the primary screen
                String::from("Shell_TrayWnd"),
                // Trays on secondary screens
                String::from("Shell_SecondaryTrayWnd"),
                String::from("TaskManagerWindow"),
                // Microsoft Text Framework service IME
                String::from("MSCTFIME UI"),
                // Desktop window holding the wallpaper and desktop icons
                String::from("SHELLDLL_DefView"),
                // Backdrop for the lock screen
                String::from("LockScreenBackstopFrame"),
                String::from("Progman"),
                // Windows 7 open Start Menu
                String::from("DV2ControlHost"),
                // Windows 8 charm bar
                String::from("Shell_CharmWindow"),
            ],
            processes: vec![
                String::from("SearchUI"),
                String::from("ShellExperienceHost"),
                String::from("LockApp"),
                String::from("PeopleExperienceHost"),
                String::from("StartMenuExperienceHost"),
            ],
        }
    }
}

impl IgnoreRules {
    /// Returns the identifier which excludes this window from tiling, if any.
    ///
    /// Matching is exact and case-sensitive, with no trimming or
    /// normalization; either argument may be empty.
    // TODO: prefix matching for dynamically-suffixed class names like
    // WMP9MediaBarFlyout* once the window filter needs it
    #[must_use]
    pub fn ignore_match(&self, window_class: &str, process_name: &str) -> Option<IgnoreMatch> {
        for class in &self.window_classes {
            if class == window_class {
                return Option::from(IgnoreMatch {
                    kind: ApplicationIdentifier::Class,
                    id: class.clone(),
                });
            }
        }

        for process in &self.processes {
            if process == process_name {
                return Option::from(IgnoreMatch {
                    kind: ApplicationIdentifier::Process,
                    id: process.clone(),
                });
            }
        }

        None
    }

    #[must_use]
    pub fn should_ignore(&self, window_class: &str, process_name: &str) -> bool {
        self.ignore_match(window_class, process_name).is_some()
    }
}
