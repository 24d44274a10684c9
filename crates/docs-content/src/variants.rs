//! Version-keyed content.
//!
//! Each table holds one entry per [`PhpVersion`]. Commands that only differ
//! in the version number are derived from it; prose is authored per release.

use docs_model::{PerVersion, PhpVersion};
use serde::Serialize;

const PHP_EXTENSIONS: [&str; 10] = [
    "fpm", "cli", "mysql", "xml", "curl", "mbstring", "zip", "gd", "bcmath", "intl",
];

/// One row of the quick reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReference {
    pub command: String,
    pub description: &'static str,
}

impl QuickReference {
    fn new(command: impl Into<String>, description: &'static str) -> Self {
        Self {
            command: command.into(),
            description,
        }
    }
}

/// `apt install` line for PHP and the extensions Laravel needs.
pub fn php_install_commands() -> PerVersion<String> {
    PerVersion::from_fn(|version| {
        let mut command = format!("sudo apt install -y \\\n  php{version}");
        for extension in PHP_EXTENSIONS {
            command.push_str(&format!(" \\\n  php{version}-{extension}"));
        }
        command
    })
}

pub fn php_version_check() -> PerVersion<String> {
    PerVersion::from_fn(|_| "php -v".to_string())
}

pub fn php_fpm_status_check() -> PerVersion<String> {
    PerVersion::from_fn(|version| format!("systemctl status {}", version.fpm_service()))
}

pub fn php_fpm_enable_start() -> PerVersion<String> {
    PerVersion::from_fn(|version| {
        let service = version.fpm_service();
        format!("sudo systemctl enable {service} && sudo systemctl start {service}")
    })
}

pub fn nginx_php_fpm_socket() -> PerVersion<String> {
    PerVersion::from_fn(|version| version.fpm_socket())
}

/// Server block for `/etc/nginx/sites-available/app`.
pub fn nginx_config() -> PerVersion<String> {
    PerVersion::from_fn(|version| {
        format!(
            r"server {{
    listen 80;
    server_name yourdomain.com www.yourdomain.com;

    root /var/www/app/public;
    index index.php;

    location / {{
        try_files $uri $uri/ /index.php?$query_string;
    }}

    location ~ \.php$ {{
        include snippets/fastcgi-php.conf;
        fastcgi_pass {socket};
    }}
}}",
            socket = version.fpm_socket()
        )
    })
}

pub fn php_fpm_restart() -> PerVersion<String> {
    PerVersion::from_fn(|version| format!("sudo systemctl restart {}", version.fpm_service()))
}

/// Service restarts that follow a cache rebuild.
pub fn cache_rebuild_commands() -> PerVersion<String> {
    PerVersion::from_fn(|version| {
        format!(
            "sudo systemctl restart {}\nsudo systemctl reload nginx",
            version.fpm_service()
        )
    })
}

pub fn quick_reference_commands() -> PerVersion<Vec<QuickReference>> {
    PerVersion::from_fn(|version| {
        vec![
            QuickReference::new("php artisan optimize:clear", "Clear all Laravel caches"),
            QuickReference::new("php artisan optimize", "Cache config, routes, and views"),
            QuickReference::new("php artisan migrate --force", "Run migrations in production"),
            QuickReference::new("php artisan db:seed --force", "Run seeders in production"),
            QuickReference::new(
                format!("sudo systemctl restart {}", version.fpm_service()),
                "Restart PHP-FPM",
            ),
            QuickReference::new("sudo systemctl reload nginx", "Reload Nginx config"),
            QuickReference::new("php artisan storage:link", "Create storage symlink"),
            QuickReference::new("php artisan queue:restart", "Restart queue workers"),
        ]
    })
}

pub fn version_notes() -> PerVersion<&'static [&'static str]> {
    PerVersion::new(
        &[
            "PHP 8.3 is the latest stable version with improved performance",
            "Includes new features like typed class constants and json_validate()",
            "Recommended for new Laravel 10+ projects",
        ],
        &[
            "PHP 8.2 is a stable LTS-friendly version",
            "Good choice for compatibility with older Laravel versions (9.x, 10.x)",
            "Includes readonly classes and DNF types",
        ],
    )
}

pub fn laravel_compatibility() -> PerVersion<&'static str> {
    PerVersion::new("Laravel 10.x, 11.x", "Laravel 9.x, 10.x, 11.x")
}

/// All tables resolved for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionContent {
    pub version: PhpVersion,
    pub install: String,
    pub version_check: String,
    pub fpm_status: String,
    pub fpm_enable_start: String,
    pub fpm_socket: String,
    pub nginx_config: String,
    pub fpm_restart: String,
    pub cache_rebuild: String,
    pub quick_reference: Vec<QuickReference>,
    pub notes: &'static [&'static str],
    pub laravel: &'static str,
}

impl VersionContent {
    pub fn for_version(version: PhpVersion) -> Self {
        Self {
            version,
            install: php_install_commands().get(version).clone(),
            version_check: php_version_check().get(version).clone(),
            fpm_status: php_fpm_status_check().get(version).clone(),
            fpm_enable_start: php_fpm_enable_start().get(version).clone(),
            fpm_socket: nginx_php_fpm_socket().get(version).clone(),
            nginx_config: nginx_config().get(version).clone(),
            fpm_restart: php_fpm_restart().get(version).clone(),
            cache_rebuild: cache_rebuild_commands().get(version).clone(),
            quick_reference: quick_reference_commands().get(version).clone(),
            notes: version_notes().get(version),
            laravel: laravel_compatibility().get(version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_command_lists_every_extension() {
        let install = php_install_commands();
        let php82 = install.get(PhpVersion::Php82);
        assert!(php82.starts_with("sudo apt install -y \\\n  php8.2 \\\n  php8.2-fpm"));
        assert!(php82.ends_with("php8.2-intl"));
        assert!(!php82.contains("8.3"));
        assert_eq!(php82.lines().count(), 12);
    }

    #[test]
    fn nginx_config_points_at_version_socket() {
        for (version, config) in nginx_config().iter() {
            assert!(config.contains(&format!("fastcgi_pass {};", version.fpm_socket())));
            assert!(config.contains(r"location ~ \.php$ {"));
        }
    }

    #[test]
    fn quick_reference_restarts_matching_fpm() {
        let rows = quick_reference_commands();
        assert_eq!(rows.get(PhpVersion::Php83).len(), 8);
        assert_eq!(
            rows.get(PhpVersion::Php83)[4].command,
            "sudo systemctl restart php8.3-fpm"
        );
        assert_eq!(
            rows.get(PhpVersion::Php82)[4].command,
            "sudo systemctl restart php8.2-fpm"
        );
    }

    #[test]
    fn enable_start_names_the_service_twice() {
        assert_eq!(
            php_fpm_enable_start().get(PhpVersion::Php83),
            "sudo systemctl enable php8.3-fpm && sudo systemctl start php8.3-fpm"
        );
    }

    #[test]
    fn version_content_is_complete() {
        for version in PhpVersion::ALL {
            let content = VersionContent::for_version(version);
            assert_eq!(content.notes.len(), 3);
            assert!(content.cache_rebuild.contains(&version.fpm_service()));
            assert!(content.laravel.starts_with("Laravel"));
        }
    }
}
