//! Common deployment errors and their fixes.

use docs_model::{
    Block, Callout, HeaderStyle, Inline, Page, PageHeader, PhpVersion, Route, Section,
    SectionVariant, Tone,
};

use crate::variants::VersionContent;

fn step(number: u8, text: &str) -> Block {
    Block::Paragraph(vec![
        Inline::strong(format!("Step {number}:")),
        Inline::text(format!(" {text}")),
    ])
}

fn error_seen(prefix: &str, messages: &[&str]) -> Block {
    let mut runs = vec![Inline::text(prefix)];
    for (idx, message) in messages.iter().enumerate() {
        if idx > 0 {
            runs.push(Inline::text(" or "));
        }
        runs.push(Inline::code(*message));
    }
    Block::Note(runs)
}

pub fn troubleshooting_page(version: PhpVersion) -> Page {
    let content = VersionContent::for_version(version);
    Page::new(
        Route::Troubleshooting,
        "Troubleshooting | Laravel Server Deployment Guide",
        "Common errors and fixes for Laravel production server deployment. Permission denied errors, storage issues, and more.",
    )
    .with_header(
        PageHeader::new(
            HeaderStyle::Banner,
            "Troubleshooting",
            "Common errors you might encounter during Laravel production deployment and how to fix them.",
        )
        .with_icon("wrench")
        .with_notice(vec![
            Inline::text("Showing troubleshooting for "),
            Inline::strong(format!("PHP {version}")),
            Inline::text(". Commands are version-specific."),
        ]),
    )
    .with_sections(vec![
        permission_denied(&content),
        storage_not_found(),
        php_fpm_error(&content),
        check_web_server(),
    ])
}

fn permission_denied(content: &VersionContent) -> Section {
    Section::new("permission-denied", "Permission Denied Error (Laravel Log)")
        .nav_label("Permission Denied")
        .icon("wrench")
        .variant(SectionVariant::Warning)
        .blocks(vec![
            error_seen(
                "If you see this error: ",
                &["\"storage/logs/laravel.log\" could not be opened: Permission denied"],
            ),
            step(1, "Navigate to your Laravel app directory:"),
            Block::code("cd /var/www/YOUR_APP"),
            step(2, "Fix ownership (most important):"),
            Block::code("sudo chown -R www-data:www-data storage bootstrap/cache"),
            step(3, "Fix permissions:"),
            Block::code("sudo chmod -R 775 storage bootstrap/cache"),
            step(4, "Recreate the log file:"),
            Block::code(
                "sudo rm -f storage/logs/laravel.log\nsudo touch storage/logs/laravel.log\nsudo chown www-data:www-data storage/logs/laravel.log\nsudo chmod 664 storage/logs/laravel.log",
            ),
            step(5, "Clear Laravel caches:"),
            Block::code("php artisan optimize:clear"),
            step(6, &format!("Restart PHP-FPM (PHP {}):", content.version)),
            Block::code(content.fpm_restart.clone()),
            step(7, "Verify permissions are correct:"),
            Block::code("ls -ld storage storage/logs bootstrap/cache"),
            Block::Note(vec![
                Inline::text("You should see "),
                Inline::code("www-data www-data"),
                Inline::text(" as owner for all directories."),
            ]),
            Block::Callout(Callout::new(
                Tone::Success,
                Some("Expected Output"),
                vec![Block::code(
                    "drwxrwxr-x  www-data www-data storage\ndrwxrwxr-x  www-data www-data storage/logs\ndrwxrwxr-x  www-data www-data bootstrap/cache",
                )],
            )),
        ])
}

fn storage_not_found() -> Section {
    Section::new("storage-not-found", "Storage Directory Not Found")
        .icon("wrench")
        .variant(SectionVariant::Warning)
        .blocks(vec![
            error_seen(
                "If you see: ",
                &["chown: cannot access 'storage': No such file or directory"],
            ),
            Block::text("Make sure you're in the correct directory:"),
            Block::code("cd /var/www/YOUR_APP\npwd"),
            Block::Note(vec![
                Inline::text("The output should show "),
                Inline::code("/var/www/YOUR_APP"),
            ]),
            Block::text("List directories to verify structure:"),
            Block::code("ls -la"),
            Block::Note(vec![
                Inline::text("You should see "),
                Inline::code("storage"),
                Inline::text(" and "),
                Inline::code("bootstrap"),
                Inline::text(" directories."),
            ]),
            Block::text("If directories are missing, create them:"),
            Block::code(
                "mkdir -p storage/logs storage/framework/sessions storage/framework/views storage/framework/cache\nmkdir -p bootstrap/cache",
            ),
        ])
}

fn php_fpm_error(content: &VersionContent) -> Section {
    let version = content.version;
    let service = version.fpm_service();
    let socket_path = format!("/run/php/{service}.sock");
    let connect_failed = format!("connect() to unix:{socket_path} failed");
    Section::new("php-fpm-error", format!("PHP {version} FPM Not Running"))
        .nav_label("PHP-FPM Not Running")
        .icon("wrench")
        .variant(SectionVariant::Warning)
        .blocks(vec![
            error_seen(
                "If you see: ",
                &["502 Bad Gateway", connect_failed.as_str()],
            ),
            Block::text("Check PHP-FPM status:"),
            Block::code(content.fpm_status.clone()),
            Block::text("If not running, start it:"),
            Block::code(format!(
                "sudo systemctl start {service}\nsudo systemctl enable {service}"
            )),
            Block::text("Check if PHP-FPM socket exists:"),
            Block::code(format!("ls -la {socket_path}")),
            Block::text(format!("Verify Nginx is configured for PHP {version}:")),
            Block::code(format!("grep -r \"{service}\" /etc/nginx/sites-enabled/")),
            Block::Note(vec![
                Inline::text("Make sure your Nginx config points to "),
                Inline::code(content.fpm_socket.clone()),
            ]),
        ])
}

fn check_web_server() -> Section {
    Section::new("check-web-server", "Identify Your Web Server User")
        .nav_label("Web Server User")
        .icon("wrench")
        .blocks(vec![
            Block::text("Before fixing permissions, verify which user your web server runs as:"),
            Block::text("For Nginx:"),
            Block::code("ps aux | grep nginx"),
            Block::text("For Apache:"),
            Block::code("ps aux | grep apache"),
            Block::Callout(Callout::new(
                Tone::Info,
                None,
                vec![Block::Paragraph(vec![
                    Inline::text("On Ubuntu/Debian, the web server typically runs as "),
                    Inline::code("www-data"),
                    Inline::text(". On CentOS/RHEL, it might be "),
                    Inline::code("nginx"),
                    Inline::text(" or "),
                    Inline::code("apache"),
                    Inline::text("."),
                ])],
            )),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_in_order() {
        let ids: Vec<String> = troubleshooting_page(PhpVersion::Php83)
            .anchors()
            .into_iter()
            .map(|anchor| anchor.id)
            .collect();
        assert_eq!(
            ids,
            [
                "permission-denied",
                "storage-not-found",
                "php-fpm-error",
                "check-web-server"
            ]
        );
    }

    #[test]
    fn fpm_section_uses_selected_version() {
        let page = troubleshooting_page(PhpVersion::Php82);
        let section = page.section("php-fpm-error").unwrap();
        assert_eq!(section.title, "PHP 8.2 FPM Not Running");
        assert!(page
            .code_blocks()
            .iter()
            .any(|block| block.code == "ls -la /run/php/php8.2-fpm.sock"));
    }
}
