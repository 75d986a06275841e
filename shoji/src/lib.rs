#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc)]

//! Window-classification policy for a tiling window manager.
//!
//! This crate answers the question the window filter asks for every
//! enumerated top-level window: should it be managed (tiled) or left to the
//! operating system? It also carries the spacing values the layout engine
//! reads when computing tile geometry. Window enumeration, event hooks and
//! window manipulation live in the consumers of this crate.

pub mod policy;
pub mod rules;
pub mod spacing;
pub mod static_config;

pub use policy::*;
pub use rules::*;
pub use spacing::*;
pub use static_config::*;

use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    pub static ref HOME_DIR: PathBuf = {
        std::env::var("SHOJI_CONFIG_HOME").map_or_else(
            |_| dirs::home_dir().expect("there is no home directory"),
            |config_home| {
                let home = PathBuf::from(&config_home);

                assert!(
                    home.is_dir(),
                    "$Env:SHOJI_CONFIG_HOME is set to '{config_home}', which is not a valid directory"
                );

                home
            },
        )
    };
}
