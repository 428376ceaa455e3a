//! nginx virtual-host rendering: pure functions, no I/O, no async.
//!
//! The template is a static string with `{{ name }}` placeholders. Rendering
//! is plain substitution: no conditionals, no loops, no escaping.

use std::path::Path;

use crate::domain::config::DevhostConfig;
use crate::domain::project::Project;

/// Virtual-host template for a PHP-FPM backed project.
pub const VHOST_TEMPLATE: &str = r"server {
    listen 80;
    server_name {{ hostname }};
    root {{ project_path }}/public;

    index index.php index.html index.htm;

    location / {
        try_files $uri $uri/ /index.php?$query_string;
    }

    location ~ \.php$ {
        include fastcgi_params;
        fastcgi_pass unix:{{ fpm_socket }};
        fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
    }

    error_log {{ error_log }};
    access_log {{ access_log }};
}
";

/// Values substituted into [`VHOST_TEMPLATE`].
#[derive(Debug, Clone, Copy)]
pub struct VhostVars<'a> {
    pub hostname: &'a str,
    pub project_path: &'a Path,
    pub fpm_socket: &'a Path,
    pub error_log: &'a Path,
    pub access_log: &'a Path,
}

impl<'a> VhostVars<'a> {
    /// Collect template variables for `project` from the configuration.
    #[must_use]
    pub fn for_project(project: &'a Project, config: &'a DevhostConfig) -> Self {
        Self {
            hostname: &project.hostname,
            project_path: &project.path,
            fpm_socket: &config.fpm_socket,
            error_log: &config.error_log,
            access_log: &config.access_log,
        }
    }
}

/// Render [`VHOST_TEMPLATE`] with `vars`.
///
/// Returns the config text; does NOT write to disk.
#[must_use]
pub fn render_vhost(vars: &VhostVars<'_>) -> String {
    render(
        VHOST_TEMPLATE,
        &[
            ("hostname", vars.hostname.to_string()),
            ("project_path", vars.project_path.display().to_string()),
            ("fpm_socket", vars.fpm_socket.display().to_string()),
            ("error_log", vars.error_log.display().to_string()),
            ("access_log", vars.access_log.display().to_string()),
        ],
    )
}

/// Single pass over `template`: substituted values are never rescanned, and
/// unknown placeholders are kept verbatim.
fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{ ") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        let value = after.find(" }}").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end + 3))
        });
        match value {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &after[consumed..];
            }
            None => {
                out.push_str("{{ ");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
