//! Everyday production commands.

use docs_model::{
    Block, Callout, HeaderStyle, Inline, Page, PageHeader, PhpVersion, Route, Section,
    SectionVariant, Table, Tone,
};

use crate::variants::{QuickReference, VersionContent};

fn step(number: u8, text: &str) -> Block {
    Block::Paragraph(vec![
        Inline::strong(format!("Step {number}:")),
        Inline::text(format!(" {text}")),
    ])
}

pub fn commands_page(version: PhpVersion) -> Page {
    let content = VersionContent::for_version(version);
    Page::new(
        Route::Commands,
        "Useful Commands | Laravel Server Deployment Guide",
        "Essential Laravel production commands for database management, cache clearing, and deployment verification.",
    )
    .with_header(
        PageHeader::new(
            HeaderStyle::Banner,
            "Useful Commands",
            "Quick reference for common Laravel production server commands.",
        )
        .with_icon("refresh-cw")
        .with_notice(vec![
            Inline::text("Showing commands for "),
            Inline::strong(format!("PHP {version}")),
            Inline::text(". Commands are version-specific."),
        ]),
    )
    .with_sections(vec![
        database_reset(),
        cache_clearing(&content),
        verification(),
        quick_reference(version, &content.quick_reference),
    ])
}

fn database_reset() -> Section {
    Section::new("database-reset", "Database Reset & Fresh Seed")
        .nav_label("Database Reset")
        .icon("database")
        .variant(SectionVariant::Info)
        .blocks(vec![
            Block::Callout(Callout::new(
                Tone::Warning,
                Some("Warning"),
                vec![Block::text(
                    "This will delete all data in your database. Use with caution in production!",
                )],
            )),
            step(1, "Enter MySQL and drop the database:"),
            Block::code_in(
                "sql",
                "sudo mysql\n\nDROP DATABASE your_database_name;\n\nCREATE DATABASE your_database_name\n  CHARACTER SET utf8mb4\n  COLLATE utf8mb4_unicode_ci;\n\nEXIT;",
            ),
            step(2, "Run migrations and seeders:"),
            Block::code("php artisan migrate --force\nphp artisan db:seed --force"),
            step(3, "If using Passport, recreate the client:"),
            Block::code("php artisan passport:client --personal --provider=users"),
        ])
}

fn cache_clearing(content: &VersionContent) -> Section {
    Section::new("cache-clearing", "Clear & Rebuild Caches")
        .nav_label("Cache Clearing")
        .icon("trash-2")
        .variant(SectionVariant::Info)
        .blocks(vec![
            Block::Callout(Callout::new(
                Tone::Info,
                Some("When to use"),
                vec![Block::text(
                    "Run these commands after deploying updates to your application.",
                )],
            )),
            step(1, "Run specific seeders (if needed):"),
            Block::code(
                "php artisan db:seed --class=CountrySeeder --force\nphp artisan db:seed --class=CategorySeeder --force\nphp artisan db:seed --class=UserSeeder --force",
            ),
            step(2, "Clear all caches:"),
            Block::code("php artisan optimize:clear"),
            step(3, "Rebuild production caches:"),
            Block::code("php artisan config:cache\nphp artisan route:cache\nphp artisan view:cache"),
            step(4, &format!("Restart services (PHP {}):", content.version)),
            Block::code(content.cache_rebuild.clone()),
        ])
}

fn verification() -> Section {
    Section::new("verification", "Verify Everything Works")
        .nav_label("Verification")
        .icon("check-circle")
        .blocks(vec![
            Block::text("Check routes are registered:"),
            Block::code("php artisan route:list | grep api/auth"),
            Block::text("Test login endpoint:"),
            Block::code(
                "curl -X POST https://yourdomain.com/api/auth/login \\\n  -H \"Accept: application/json\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{\"email\":\"test@example.com\",\"password\":\"your_password\"}'",
            ),
            Block::text("Check Laravel logs for errors:"),
            Block::code("tail -f storage/logs/laravel.log"),
            Block::text("Check Nginx error logs:"),
            Block::code("sudo tail -f /var/log/nginx/error.log"),
        ])
}

fn quick_reference(version: PhpVersion, rows: &[QuickReference]) -> Section {
    Section::new("quick-reference", format!("Quick Reference (PHP {version})"))
        .nav_label("Quick Reference")
        .icon("refresh-cw")
        .blocks(vec![Block::Table(Table {
            headers: vec!["Command".to_string(), "Description".to_string()],
            rows: rows
                .iter()
                .map(|row| {
                    vec![
                        vec![Inline::code(row.command.clone())],
                        vec![Inline::text(row.description)],
                    ]
                })
                .collect(),
        })])
}
