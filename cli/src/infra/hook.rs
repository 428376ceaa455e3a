//! Post-provision hooks.

use anyhow::Result;

use crate::application::ports::PostProvisionHook;
use crate::domain::Project;

/// Default hook: sets nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl PostProvisionHook for NoopHook {
    fn after_provision(&self, _project: &Project) -> Result<()> {
        Ok(())
    }
}
