//! The deployment guide (home page).

use docs_model::{
    Block, Callout, HeaderStyle, Inline, Page, PageHeader, PhpVersion, Route, Section,
    SectionVariant, Table, Tone,
};

use crate::variants::VersionContent;

/// Composer release the guide was written against.
pub const COMPOSER_VERSION: &str = "2.9.2";

/// Guide sections as `(id, menu label)`, in document order.
pub const GUIDE_ANCHORS: [(&str, &str); 11] = [
    ("notes", "Important Notes"),
    ("login", "Server Login"),
    ("nginx", "Install Nginx"),
    ("php", "PHP Installation"),
    ("mysql", "MySQL Setup"),
    ("composer", "Composer"),
    ("github", "GitHub Connection"),
    ("laravel", "Laravel Setup"),
    ("domain", "Domain & DNS"),
    ("ssl", "SSL Certificates"),
    ("final", "Final Steps"),
];

fn nav_label(id: &str) -> &'static str {
    GUIDE_ANCHORS
        .iter()
        .find(|(anchor, _)| *anchor == id)
        .map_or("", |(_, label)| label)
}

fn step(id: &str, title: &str, icon: &str) -> Section {
    Section::new(id, title).nav_label(nav_label(id)).icon(icon)
}

fn lead(label: &str, rest: &str) -> Block {
    Block::Paragraph(vec![Inline::strong(label), Inline::text(rest)])
}

fn row(cells: &[&str]) -> Vec<Vec<Inline>> {
    cells.iter().map(|cell| vec![Inline::text(*cell)]).collect()
}

pub fn guide_page(version: PhpVersion) -> Page {
    let content = VersionContent::for_version(version);
    Page::new(
        Route::Home,
        "Laravel Server Deployment Guide | Production Setup Documentation",
        format!(
            "Complete step-by-step guide to deploy your Laravel project to a production server. Covers PHP {version}, Nginx, MySQL, Composer, SSL, and more."
        ),
    )
    .with_keywords(format!(
        "Laravel, deployment, production server, PHP {version}, Nginx, MySQL, SSL, Let's Encrypt, Composer"
    ))
    .with_header(hero(version))
    .with_sections(vec![
        notes(),
        login(),
        nginx(),
        php(&content),
        mysql(),
        composer(),
        github(),
        laravel(),
        domain(&content),
        ssl(),
        final_steps(),
    ])
}

fn hero(version: PhpVersion) -> PageHeader {
    PageHeader::new(
        HeaderStyle::Hero,
        "Produce Your Laravel Project Into Production Server",
        "Complete step-by-step documentation for deploying Laravel applications",
    )
    .with_badges(vec![
        format!("PHP {version}"),
        format!("Composer {COMPOSER_VERSION}"),
        "Nginx".to_string(),
        "MySQL".to_string(),
        "Let's Encrypt SSL".to_string(),
    ])
    .with_start_anchor("notes")
}

fn notes() -> Section {
    Section::new("notes", "Important Notes")
        .icon("alert-triangle")
        .variant(SectionVariant::Warning)
        .blocks(vec![
            Block::Paragraph(vec![Inline::strong(
                "Before you start, keep these in mind:",
            )]),
            Block::List {
                ordered: true,
                items: vec![
                    vec![
                        Inline::text("To save a file after opening it with nano, press "),
                        Inline::code("Ctrl + X"),
                        Inline::text(" then "),
                        Inline::code("Y"),
                        Inline::text(" to apply changes"),
                    ],
                    vec![Inline::text(
                        "Before installing SSL certificates, all HTTP links will show security warnings",
                    )],
                    vec![
                        Inline::strong("Recommended:"),
                        Inline::text(
                            " Don't create your database directly in MySQL. Use Laravel migrations instead for clean separation of concerns",
                        ),
                    ],
                ],
            },
            Block::Callout(Callout::new(
                Tone::Info,
                Some("Why use migrations?"),
                vec![Block::bullets(&[
                    "Laravel migrations can create the DB",
                    "No hard-coding schema now",
                    "Clean separation of concerns",
                    "Easy to rotate credentials later",
                ])],
            )),
        ])
}

fn login() -> Section {
    step("login", "1. Server Login & Update", "terminal").blocks(vec![
        Block::text("First, connect to your server via SSH:"),
        Block::code("ssh YOUR_SERVER_NAME@YOUR_SERVER_IP"),
        Block::Note(vec![
            Inline::text("Example: "),
            Inline::code("ssh superbaba@YOUR_SERVER_IP"),
        ]),
        Block::text("Update the Linux server:"),
        Block::code("sudo apt update && sudo apt upgrade -y"),
    ])
}

fn nginx() -> Section {
    step("nginx", "2. Install Nginx", "globe").blocks(vec![
        Block::text("Install Nginx web server:"),
        Block::code("sudo apt install nginx -y"),
        Block::text("Start and enable Nginx:"),
        Block::code("sudo systemctl enable nginx\nsudo systemctl start nginx"),
        Block::text("Verify Nginx is running:"),
        Block::code("systemctl status nginx"),
        Block::Note(vec![
            Inline::text("You should see: "),
            Inline::code("Active: active (running)"),
        ]),
        Block::Paragraph(vec![
            Inline::text("Open "),
            Inline::code("http://YOUR_SERVER_IP"),
            Inline::text(" in browser - you should see \"Welcome to nginx\""),
        ]),
    ])
}

fn php(content: &VersionContent) -> Section {
    let version = content.version;
    let about = format!("About PHP {version}");
    step("php", &format!("3. PHP {version} Installation"), "server").blocks(vec![
        Block::text("Add PHP repository and update:"),
        Block::code(
            "sudo apt install software-properties-common -y\nsudo add-apt-repository ppa:ondrej/php -y\nsudo apt update",
        ),
        Block::text(format!("Install PHP {version} with required extensions:")),
        Block::code(content.install.clone()),
        Block::text("Verify PHP installation:"),
        Block::code(content.version_check.clone()),
        Block::text("Ensure PHP-FPM is running:"),
        Block::code(content.fpm_status.clone()),
        Block::Note(vec![
            Inline::text("If not running: "),
            Inline::code(content.fpm_enable_start.clone()),
        ]),
        Block::Callout(Callout::new(
            Tone::Info,
            Some(about.as_str()),
            vec![
                Block::bullets(content.notes),
                Block::Paragraph(vec![
                    Inline::strong("Compatible with: "),
                    Inline::text(content.laravel),
                ]),
            ],
        )),
    ])
}

fn mysql() -> Section {
    step("mysql", "4. MySQL Setup", "database").blocks(vec![
        Block::text("Install MySQL server:"),
        Block::code("sudo apt install mysql-server -y"),
        Block::text("Create MySQL user (replace with your credentials):"),
        Block::code_in(
            "sql",
            "sudo mysql\n\nCREATE USER 'UserNameForDB'@'localhost' IDENTIFIED BY 'STRONG_PASSWORD';\n\nGRANT CREATE, ALTER, DROP, INDEX, REFERENCES, SELECT, INSERT, UPDATE, DELETE\nON *.* TO 'UserNameForDB'@'localhost';\n\nFLUSH PRIVILEGES;\nEXIT;",
        ),
    ])
}

fn composer() -> Section {
    step("composer", "5. Install Composer", "package").blocks(vec![
        Block::text("Install Composer globally:"),
        Block::code(
            "cd ~\ncurl -sS https://getcomposer.org/installer | php\nsudo mv composer.phar /usr/local/bin/composer",
        ),
        Block::text("Verify installation:"),
        Block::code("composer --version"),
    ])
}

fn github() -> Section {
    step("github", "6. GitHub Connection", "github").blocks(vec![
        lead("Step 1:", " Generate SSH key on server:"),
        Block::code("ssh-keygen -t ed25519 -C \"your-server-name\""),
        Block::note("Press Enter for default file location and passphrase."),
        lead("Step 2:", " Copy the public key:"),
        Block::code("cat ~/.ssh/id_ed25519.pub"),
        lead("Step 3:", " Add key to GitHub:"),
        Block::bullets(&[
            "Go to your GitHub repository → Settings → Deploy keys",
            "Click \"Add deploy key\", paste your key",
            "Check \"Allow write access\" if needed",
        ]),
        lead("Step 4:", " Test connection:"),
        Block::code("ssh -T git@github.com"),
        Block::note("Expected: \"Hi USERNAME! You've successfully authenticated...\""),
    ])
}

fn laravel() -> Section {
    step("laravel", "7. Laravel Project Setup", "settings").blocks(vec![
        Block::text("Clone your repository:"),
        Block::code(
            "sudo mkdir -p /var/www\nsudo chown $USER:$USER /var/www\ncd /var/www\ngit clone git@github.com:ORG/REPO.git app\ncd app",
        ),
        Block::text("Install dependencies:"),
        Block::code("composer install --no-dev --optimize-autoloader"),
        Block::text("Setup environment:"),
        Block::code("cp .env.example .env\nnano .env"),
        Block::text("Configure your .env file:"),
        Block::code_in(
            "env",
            "APP_NAME=YourApp\nAPP_ENV=production\nAPP_KEY=\nAPP_DEBUG=false\nAPP_URL=https://yourdomain.com\n\nDB_CONNECTION=mysql\nDB_HOST=127.0.0.1\nDB_PORT=3306\nDB_DATABASE=your_db\nDB_USERNAME=your_db_user\nDB_PASSWORD=your_password",
        ),
        Block::text("Generate app key and fix permissions:"),
        Block::code(
            "php artisan key:generate\n\nsudo chown -R www-data:www-data storage bootstrap/cache\nsudo chmod -R 775 storage bootstrap/cache",
        ),
    ])
}

fn domain(content: &VersionContent) -> Section {
    step("domain", "8. Nginx & Domain Configuration", "globe").blocks(vec![
        Block::text("Create Nginx site configuration:"),
        Block::code("sudo nano /etc/nginx/sites-available/app"),
        Block::text("Add this configuration:"),
        Block::code_in("nginx", content.nginx_config.clone()),
        Block::text("Enable the site:"),
        Block::code(
            "sudo ln -s /etc/nginx/sites-available/app /etc/nginx/sites-enabled/\nsudo nginx -t\nsudo systemctl reload nginx",
        ),
        lead("DNS Setup:", " Add these records in your domain provider:"),
        Block::Table(Table {
            headers: vec!["Type".to_string(), "Host".to_string(), "Value".to_string()],
            rows: vec![
                row(&["A Record", "@", "YOUR_SERVER_IP"]),
                row(&["A Record", "www", "YOUR_SERVER_IP"]),
            ],
        }),
    ])
}

fn ssl() -> Section {
    step("ssl", "9. SSL Certificates (Let's Encrypt)", "shield").blocks(vec![
        Block::text("Install Certbot:"),
        Block::code("sudo apt install certbot python3-certbot-nginx -y"),
        Block::text("Generate SSL certificate:"),
        Block::code("sudo certbot --nginx -d yourdomain.com -d www.yourdomain.com"),
        Block::note("Follow the prompts: enter your email, accept terms."),
        Block::text("Create HTTP to HTTPS redirect:"),
        Block::code("sudo nano /etc/nginx/sites-available/yourDomain"),
        Block::code_in(
            "nginx",
            "server {\n    listen 80;\n    server_name yourDomain.com www.yourDomain.com;\n    return 301 https://$host$request_uri;\n}",
        ),
    ])
}

fn final_steps() -> Section {
    step("final", "10. Final Steps", "check-circle").blocks(vec![
        Block::text("Run migrations and optimize:"),
        Block::code("php artisan migrate --force\nphp artisan storage:link\nphp artisan optimize"),
        Block::text("If optimization fails, fix permissions:"),
        Block::code(
            "mkdir -p storage/logs bootstrap/cache\nsudo chown -R www-data:www-data storage bootstrap/cache\nsudo find storage bootstrap/cache -type d -exec chmod 775 {} \\;\nsudo find storage bootstrap/cache -type f -exec chmod 664 {} \\;",
        ),
        Block::text("Add your user to www-data group:"),
        Block::code("sudo usermod -aG www-data YOUR_SSH_USER\nnewgrp www-data"),
        Block::text("Clear and re-optimize:"),
        Block::code(
            "php artisan config:clear\nphp artisan cache:clear\nphp artisan view:clear\nphp artisan optimize",
        ),
        Block::Paragraph(vec![Inline::strong("Final Verification:")]),
        Block::code("sudo ss -tulnp | grep nginx"),
        Block::note("Expected: Ports 80 and 443 should be listening."),
        Block::Callout(Callout::new(
            Tone::Success,
            Some("Congratulations!"),
            vec![Block::Paragraph(vec![
                Inline::text("Your Laravel application should now be live at "),
                Inline::code("https://yourdomain.com"),
            ])],
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_navbar_order() {
        let page = guide_page(PhpVersion::Php83);
        let ids: Vec<String> = page.anchors().into_iter().map(|a| a.id).collect();
        let expected: Vec<&str> = GUIDE_ANCHORS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, expected);
        assert_eq!(page.anchors()[1].label, "Server Login");
    }

    #[test]
    fn php_section_follows_selected_version() {
        let page = guide_page(PhpVersion::Php82);
        let php = page.section("php").unwrap();
        assert_eq!(php.title, "3. PHP 8.2 Installation");
        let code: Vec<&str> = page.code_blocks().iter().map(|c| c.code.as_str()).collect();
        assert!(code.contains(&"systemctl status php8.2-fpm"));
        assert!(code.iter().all(|c| !c.contains("php8.3")));
    }

    #[test]
    fn hero_badges_name_version_and_composer() {
        let header = guide_page(PhpVersion::Php83).header.unwrap();
        assert_eq!(header.badges[0], "PHP 8.3");
        assert_eq!(header.badges[1], "Composer 2.9.2");
        assert_eq!(header.start_anchor.as_deref(), Some("notes"));
    }
}
