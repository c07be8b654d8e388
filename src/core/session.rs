// src/core/session.rs

//! `DesktopSession`: the two API backends composed as independent
//! capabilities.

use crate::config::ClientOptions;
use crate::core::LeagueDeskError;
use crate::core::lcu::LcuReader;
use crate::core::live::LiveClientReader;
use tracing::info;

/// A session against the desktop client's local APIs.
///
/// The two backends have independent availability: the live API exists only
/// during a match, the LCU only while the client application is open. The
/// live reader is always constructible (its steady-state answer is simply "no
/// data"); the LCU reader is present only when a running client was
/// discovered at connect time.
pub struct DesktopSession {
    live: LiveClientReader,
    lcu: Option<LcuReader>,
}

impl DesktopSession {
    /// Connects to whatever is currently reachable.
    ///
    /// A missing client is not an error here; the session simply carries no
    /// lobby capability. Configuration-class failures (building the HTTP
    /// clients) still raise.
    pub fn connect(options: &ClientOptions) -> Result<Self, LeagueDeskError> {
        let live = LiveClientReader::connect(options)?;

        let lcu = match LcuReader::connect(None, options) {
            Ok(reader) => Some(reader),
            Err(LeagueDeskError::ClientNotRunning) => {
                info!("League client is not running; lobby features are unavailable");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self { live, lcu })
    }

    /// Builds a session from already-constructed readers.
    pub fn from_parts(live: LiveClientReader, lcu: Option<LcuReader>) -> Self {
        Self { live, lcu }
    }

    pub fn live(&self) -> &LiveClientReader {
        &self.live
    }

    pub fn lcu(&self) -> Option<&LcuReader> {
        self.lcu.as_ref()
    }
}
