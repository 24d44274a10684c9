//! Push notifications with Firebase Cloud Messaging.

use docs_model::{
    Anchor, Block, Callout, HeaderStyle, Inline, Page, PageHeader, Route, Section, SectionGroup,
    SectionVariant, Tone,
};

/// Section groups for the "On this page" menu, in document order.
pub fn notification_groups() -> Vec<SectionGroup> {
    let group = |id: &str, label: &str, sections: &[(&str, &str)]| {
        SectionGroup::new(
            id,
            label,
            sections
                .iter()
                .map(|(id, label)| Anchor::new(*id, *label))
                .collect(),
        )
    };
    vec![
        group(
            "getting-started",
            "Getting Started",
            &[
                ("introduction", "Introduction"),
                ("outdated-notes", "Outdated Tutorials"),
            ],
        ),
        group(
            "firebase-config",
            "Firebase Configuration",
            &[
                ("firebase-setup", "Firebase Setup"),
                ("server-setup", "Production Server"),
                ("sdk-installation", "SDK Installation"),
            ],
        ),
        group(
            "database-api",
            "Database & API",
            &[
                ("device-tokens", "Device Tokens"),
                ("endpoint-creation", "API Endpoint"),
            ],
        ),
        group(
            "fcm-implementation",
            "FCM Implementation",
            &[
                ("fcm-service", "FCM Service Class"),
                ("test-notification", "Test Notification"),
            ],
        ),
        group(
            "advanced-usage",
            "Advanced Usage",
            &[
                ("multi-device", "Multiple Devices"),
                ("admin-notifications", "Admin Notifications"),
                ("token-cleanup", "Token Cleanup"),
                ("best-practices", "Best Practices"),
            ],
        ),
    ]
}

fn h4(text: &str) -> Block {
    Block::heading(4, text)
}

fn php(code: &str) -> Block {
    Block::code_in("php", code)
}

fn callout(tone: Tone, title: &str, blocks: Vec<Block>) -> Block {
    Block::Callout(Callout::new(tone, Some(title), blocks))
}

/// `updated` is the human readable date shown in the header and introduction.
pub fn notifications_page(updated: &str) -> Page {
    let groups = notification_groups();
    let labels: Vec<Anchor> = groups
        .iter()
        .flat_map(|group| group.sections.iter().cloned())
        .collect();
    let label_for = |id: &str| {
        labels
            .iter()
            .find(|anchor| anchor.id == id)
            .map_or_else(String::new, |anchor| anchor.label.clone())
    };

    let sections = vec![
        introduction(updated),
        outdated_notes(),
        firebase_setup(),
        server_setup(),
        sdk_installation(),
        device_tokens(),
        endpoint_creation(),
        fcm_service(),
        test_notification(),
        multi_device(),
        admin_notifications(),
        token_cleanup(),
        best_practices(),
    ]
    .into_iter()
    .map(|section| {
        let label = label_for(&section.id);
        section.nav_label(label)
    })
    .collect();

    Page::new(
        Route::IntegrationNotifications,
        "Push Notifications - Laravel Server Docs",
        "Firebase Cloud Messaging (FCM) push notifications for Laravel 8-12 without unnecessary packages.",
    )
    .with_header(
        PageHeader::new(
            HeaderStyle::Banner,
            "Push Notifications",
            "Firebase Cloud Messaging (FCM) with Laravel",
        )
        .with_icon("bell")
        .with_badges(vec!["Firebase".to_string(), "Laravel 8-12".to_string()])
        .with_updated(updated),
    )
    .with_sections(sections)
    .with_groups(groups)
}

fn introduction(updated: &str) -> Section {
    Section::new("introduction", "Introduction")
        .icon("zap")
        .variant(SectionVariant::Info)
        .blocks(vec![
            Block::Paragraph(vec![
                Inline::text("This guide walks you through implementing "),
                Inline::strong("push notifications"),
                Inline::text(
                    " in Laravel using Firebase Cloud Messaging (FCM). We'll cover everything from initial Firebase setup to sending notifications to multiple devices.",
                ),
            ]),
            Block::Callout(Callout::new(
                Tone::Success,
                None,
                vec![Block::Paragraph(vec![
                    Inline::strong(format!("Updated for {updated}:")),
                    Inline::text(
                        " This documentation uses the latest best practices and is tested with Laravel 8 through 12. Unlike many outdated tutorials online, we'll show you the ",
                    ),
                    Inline::em("correct"),
                    Inline::text(" approach without unnecessary packages."),
                ])],
            )),
            h4("What you'll learn:"),
            Block::bullets(&[
                "Setting up Firebase project and service account",
                "Configuring production server for FCM",
                "Installing the correct SDK (and avoiding wrong ones)",
                "Storing device tokens per user",
                "Creating a reusable FCM service class",
                "Sending to single and multiple devices",
                "Handling invalid tokens automatically",
            ]),
        ])
}

fn outdated_notes() -> Section {
    Section::new("outdated-notes", "Notes on Outdated Tutorials")
        .icon("alert-triangle")
        .variant(SectionVariant::Warning)
        .blocks(vec![
            Block::Paragraph(vec![
                Inline::text(
                    "Many tutorials online are outdated and will lead you astray. Here's what to ",
                ),
                Inline::strong("avoid"),
                Inline::text(":"),
            ]),
            callout(
                Tone::Danger,
                "Google Auth Library",
                vec![
                    Block::note("You may see tutorials asking you to install:"),
                    Block::code("composer require google/auth"),
                    Block::Note(vec![
                        Inline::strong("Do not install this manually."),
                        Inline::text(
                            " The Firebase PHP SDK already includes it. OAuth2 access tokens are handled automatically. Installing it yourself is unnecessary and confusing.",
                        ),
                    ]),
                ],
            ),
            callout(
                Tone::Danger,
                "config/services.php Configuration",
                vec![
                    Block::Note(vec![
                        Inline::text("Old tutorials force Firebase config into "),
                        Inline::code("config/services.php"),
                        Inline::text(":"),
                    ]),
                    php(
                        "// Example (OUTDATED / UNNECESSARY):\n'firebase' => [\n    'credentials' => env('FIREBASE_CREDENTIAL'),\n],",
                    ),
                    Block::Note(vec![
                        Inline::strong("This is NOT required anymore."),
                        Inline::text(
                            " We'll use environment variables directly in our service class.",
                        ),
                    ]),
                ],
            ),
        ])
}

fn firebase_setup() -> Section {
    Section::new("firebase-setup", "Firebase Project Setup")
        .icon("key")
        .blocks(vec![
            Block::text("First, let's get the credentials you need from Firebase. You'll need:"),
            Block::Callout(Callout::new(
                Tone::Neutral,
                None,
                vec![Block::List {
                    ordered: false,
                    items: vec![
                        vec![
                            Inline::code("FCM_PROJECT_ID"),
                            Inline::text(" - Your Firebase project ID"),
                        ],
                        vec![
                            Inline::code("FCM_SERVICE_ACCOUNT_PATH"),
                            Inline::text(" - Path to your private key JSON"),
                        ],
                    ],
                }],
            )),
            h4("Step-by-step:"),
            Block::List {
                ordered: true,
                items: vec![
                    vec![
                        Inline::text("Go to "),
                        Inline::link("https://console.firebase.google.com/", "Firebase Console"),
                        Inline::text(
                            " or click \"Console\" at the top right of the Firebase website",
                        ),
                    ],
                    vec![Inline::text("Create or open your project")],
                    vec![
                        Inline::text("Click the "),
                        Inline::strong("Settings icon"),
                        Inline::text(
                            " (gear) next to the project name at the top left, then select ",
                        ),
                        Inline::strong("Project settings"),
                    ],
                    vec![
                        Inline::text("In the "),
                        Inline::strong("General"),
                        Inline::text(" tab, you'll find your "),
                        Inline::strong("Project ID"),
                    ],
                    vec![
                        Inline::text("Go to the "),
                        Inline::strong("Service accounts"),
                        Inline::text(" tab"),
                    ],
                    vec![
                        Inline::text("Click "),
                        Inline::strong("\"Generate new private key\""),
                        Inline::text(" button"),
                    ],
                    vec![
                        Inline::text("Download the JSON file and store it in your Laravel project at "),
                        Inline::code("storage/app/firebase/service-account.json"),
                    ],
                ],
            },
            callout(
                Tone::Warning,
                "Security Note",
                vec![
                    Block::Note(vec![
                        Inline::text("Add this to your "),
                        Inline::code(".gitignore"),
                        Inline::text(" to prevent accidentally committing your credentials:"),
                    ]),
                    Block::code("# Firebase\n/storage/app/firebase/*.json"),
                ],
            ),
        ])
}

fn server_setup() -> Section {
    Section::new("server-setup", "Production Server Setup")
        .icon("server")
        .blocks(vec![
            Block::text("Now let's configure your production server with the Firebase credentials."),
            h4("1. Upload the private key to your server:"),
            Block::code(
                "# From your local machine\nscp /path/to/service-account.json \\\n    your_user@your_server_ip:/var/www/your-app/storage/app/firebase/service-account.json",
            ),
            h4("2. Verify the file exists on the server:"),
            Block::code(
                "# SSH into your server\nssh your_user@your_server_ip\n\n# Check the file\nls /var/www/your-app/storage/app/firebase/\n# Expected output: service-account.json",
            ),
            h4("3. Update your .env file:"),
            Block::code(
                "FCM_PROJECT_ID=your-project-id\nFCM_SERVICE_ACCOUNT_PATH=/var/www/your-app/storage/app/firebase/service-account.json",
            ),
            Block::Callout(Callout::new(
                Tone::Info,
                None,
                vec![Block::Paragraph(vec![
                    Inline::strong("Note:"),
                    Inline::text(" In production, use the absolute path (not "),
                    Inline::code("${PWD}"),
                    Inline::text(") for reliability."),
                ])],
            )),
        ])
}

fn sdk_installation() -> Section {
    Section::new("sdk-installation", "SDK Installation")
        .icon("wrench")
        .blocks(vec![
            Block::Paragraph(vec![
                Inline::text("We'll use the "),
                Inline::strong("Kreait Firebase PHP SDK"),
                Inline::text(" - the most trusted and actively maintained library."),
            ]),
            callout(
                Tone::Success,
                "What to install",
                vec![Block::code("composer require kreait/firebase-php")],
            ),
            callout(
                Tone::Danger,
                "What NOT to install",
                vec![
                    Block::code("# DO NOT install this:\ncomposer require kreait/laravel-firebase"),
                    Block::Note(vec![
                        Inline::code("kreait/laravel-firebase"),
                        Inline::text(
                            " is a Laravel wrapper that adds unnecessary configuration, potential version conflicts, and harder debugging.",
                        ),
                    ]),
                ],
            ),
            h4("Best practice approach:"),
            Block::bullets(&[
                "Use the core SDK directly",
                "Create your own service class (we'll do this next)",
                "Load credentials from .env",
                "Avoid facades and auto-magic",
            ]),
            Block::Note(vec![
                Inline::text("This approach works with "),
                Inline::strong("Laravel 8 through 12"),
                Inline::text(", is future-proof, and is easier for beginners to understand."),
            ]),
        ])
}

fn device_tokens() -> Section {
    Section::new("device-tokens", "Device Token Storage")
        .icon("database")
        .blocks(vec![
            Block::Paragraph(vec![
                Inline::text("To send notifications, we need to know "),
                Inline::strong("who"),
                Inline::text(
                    " will receive them. Each mobile device has a unique FCM token that we need to store.",
                ),
            ]),
            callout(
                Tone::Warning,
                "Important Note",
                vec![
                    Block::Note(vec![
                        Inline::text("If you're using "),
                        Inline::strong("Laravel Passport"),
                        Inline::text(
                            " for authentication, do NOT mix it with notification device tokens. Authentication and notifications are two different systems:",
                        ),
                    ]),
                    Block::List {
                        ordered: false,
                        items: vec![
                            vec![
                                Inline::text("Laravel Passport handles "),
                                Inline::em("who the user is"),
                            ],
                            vec![
                                Inline::text("Firebase handles "),
                                Inline::em("where to send notifications"),
                            ],
                        ],
                    },
                    Block::note(
                        "Users can log in from multiple devices, so we store push tokens in a separate table.",
                    ),
                ],
            ),
            h4("1. Create the migration:"),
            Block::code("php artisan make:migration create_device_tokens_table"),
            h4("2. Define the table structure:"),
            php(
                "Schema::create('device_tokens', function (Blueprint $table) {\n    $table->id();\n    $table->foreignId('user_id')\n          ->constrained()\n          ->cascadeOnDelete();\n    $table->string('token')->unique();\n    $table->string('platform')->comment('android | ios');\n    $table->timestamps();\n});",
            ),
            callout(
                Tone::Neutral,
                "Why this design:",
                vec![Block::List {
                    ordered: false,
                    items: vec![
                        vec![Inline::code("unique(token)"), Inline::text(" - prevents duplicates")],
                        vec![
                            Inline::code("cascadeOnDelete"),
                            Inline::text(" - cleanup when user is deleted"),
                        ],
                        vec![
                            Inline::code("platform"),
                            Inline::text(" - helps with future filtering (iOS/Android specific)"),
                        ],
                    ],
                }],
            ),
            h4("3. Run the migration:"),
            Block::code("php artisan migrate"),
            h4("4. Create the DeviceToken model:"),
            Block::code("php artisan make:model DeviceToken"),
            php(
                r"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Model;

class DeviceToken extends Model
{
    protected $fillable = [
        'user_id',
        'token',
        'platform',
    ];

    public function user()
    {
        return $this->belongsTo(User::class);
    }
}",
            ),
            h4("5. Add the relation to User model:"),
            php(
                r"// In App\Models\User

public function deviceTokens()
{
    return $this->hasMany(DeviceToken::class);
}",
            ),
        ])
}

fn endpoint_creation() -> Section {
    Section::new("endpoint-creation", "Token Registration Endpoint")
        .icon("smartphone")
        .blocks(vec![
            Block::text(
                "This endpoint allows the mobile app to send its Firebase device token to the backend so we can later send push notifications.",
            ),
            h4("1. Create the Request validation:"),
            Block::code("php artisan make:request StoreDeviceTokenRequest"),
            php(
                r"<?php

declare(strict_types=1);

namespace App\Http\Requests\Auth;

use Illuminate\Foundation\Http\FormRequest;

final class RegisterFcmTokenRequest extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        return [
            'token' => ['required', 'string'],
            'platform' => ['required', 'in:android,ios'],
        ];
    }

    public function messages(): array
    {
        return [
            'token.required' => __('FCM token is required'),
            'token.string' => __('FCM token must be a string'),
        ];
    }
}",
            ),
            h4("2. Create the Controller:"),
            Block::code("php artisan make:controller Api/DeviceTokenController"),
            php(
                r"<?php

namespace App\Http\Controllers\Api;

use App\Http\Controllers\Controller;
use App\Http\Requests\Auth\RegisterFcmTokenRequest;

class DeviceTokenController extends Controller
{
    /**
     * Register or update FCM token for push notifications
     * Used by mobile apps (customers, delivery boys, etc.)
     */
    public function registerFcmToken(RegisterFcmTokenRequest $request)
    {
        try {
            $user = $request->user();

            $user->deviceTokens()->updateOrCreate(
                ['token' => $request->token],
                ['platform' => $request->platform]
            );

            return response()->json([
                'success' => true,
                'message' => __('FCM token registered successfully'),
            ]);
        } catch (\Throwable $e) {
            return response()->json([
                'success' => false,
                'message' => __('Failed to register FCM token'),
            ], 500);
        }
    }
}",
            ),
            h4("3. Add the route:"),
            php(
                "// routes/api.php\n\nRoute::middleware('auth:api')->post(\n    '/device-tokens',\n    [DeviceTokenController::class, 'registerFcmToken']\n);",
            ),
            h4("4. When should mobile app call this?"),
            Block::bullets(&[
                "After login",
                "On app startup",
                "When Firebase refreshes the token",
            ]),
            Block::heading(5, "Example request:"),
            Block::code_in(
                "json",
                "{\n    \"token\": \"fcm_device_token_here\",\n    \"platform\": \"android\"\n}",
            ),
        ])
}

fn fcm_service() -> Section {
    Section::new("fcm-service", "FCM Service Class")
        .icon("rocket")
        .blocks(vec![
            Block::text("Now let's create a reusable service class that handles all FCM operations."),
            h4("1. Create the service directory and file:"),
            Block::code("mkdir -p app/Services/Firebase\ntouch app/Services/Firebase/FcmService.php"),
            h4("2. Implement the FcmService:"),
            php(
                r"<?php

declare(strict_types=1);

namespace App\Services\Firebase;

use Kreait\Firebase\Factory;
use Kreait\Firebase\Messaging;
use Kreait\Firebase\Messaging\CloudMessage;
use Kreait\Firebase\Messaging\Notification;

final class FcmService
{
    private Messaging $messaging;

    public function __construct()
    {
        $this->messaging = (new Factory)
            ->withServiceAccount(env('FCM_SERVICE_ACCOUNT_PATH'))
            ->withProjectId(env('FCM_PROJECT_ID'))
            ->createMessaging();
    }

    /**
     * Send notification to a single device token
     */
    public function send(string $token, string $title, string $body, array $data = []): bool
    {
        try {
            $message = CloudMessage::withTarget('token', $token)
                ->withNotification(Notification::create($title, $body))
                ->withData($data);

            $this->messaging->send($message);

            return true;
        } catch (\Throwable $e) {
            return false;
        }
    }
}",
            ),
            callout(
                Tone::Info,
                "How it works:",
                vec![Block::note(
                    "Firebase Cloud Messaging uses OAuth2 and service accounts. The Firebase PHP SDK handles authentication, token generation, and retries automatically. We only need to create messages and send them.",
                )],
            ),
        ])
}

fn test_notification() -> Section {
    Section::new("test-notification", "Testing Notifications")
        .icon("bell")
        .blocks(vec![
            Block::text(
                "Let's create a test endpoint to verify everything works. The goal is simple: \"Can Laravel send a push notification?\"",
            ),
            h4("Test Controller:"),
            php(
                r"<?php

namespace App\Http\Controllers\Api;

use App\Http\Controllers\Controller;
use App\Services\Firebase\FcmService;
use Illuminate\Http\Request;

class TestNotificationController extends Controller
{
    /**
     * Send a test push notification to the authenticated user
     */
    public function sendToMe(Request $request, FcmService $fcmService)
    {
        $user = $request->user();

        $deviceToken = $user->deviceTokens()->latest()->first();

        if (! $deviceToken) {
            return response()->json([
                'success' => false,
                'message' => 'You have no registered device token',
            ], 404);
        }

        $sent = $fcmService->send(
            $deviceToken->token,
            'Test Notification',
            'Push notifications are working!'
        );

        return response()->json([
            'success' => $sent,
            'message' => $sent
                ? 'Notification sent successfully'
                : 'Failed to send notification',
        ]);
    }
}",
            ),
            h4("Route:"),
            php(
                "// routes/api.php\n\nRoute::middleware('auth:api')->get(\n    '/test-notification',\n    [TestNotificationController::class, 'sendToMe']\n);",
            ),
            h4("How to test:"),
            Block::code_in(
                "http",
                "GET /api/test-notification\nAuthorization: Bearer {access_token}",
            ),
        ])
}

fn multi_device() -> Section {
    Section::new("multi-device", "Sending to Multiple Devices")
        .icon("users")
        .blocks(vec![
            Block::Paragraph(vec![
                Inline::text(
                    "A user may log in from multiple phones, reinstall the app, or use both Android and iOS. We need to send notifications to ",
                ),
                Inline::strong("all their devices"),
                Inline::text("."),
            ]),
            h4("Send to all user devices:"),
            php(
                r"<?php

namespace App\Http\Controllers\Api;

use App\Http\Controllers\Controller;
use App\Services\Firebase\FcmService;
use Illuminate\Http\Request;

class UserNotificationController extends Controller
{
    public function notifyMe(Request $request, FcmService $fcmService)
    {
        $user = $request->user();

        $tokens = $user->deviceTokens()->pluck('token');

        if ($tokens->isEmpty()) {
            return response()->json([
                'success' => false,
                'message' => 'No registered devices found',
            ], 404);
        }

        foreach ($tokens as $token) {
            $fcmService->send(
                $token,
                'Hello!',
                'This notification was sent to all your devices'
            );
        }

        return response()->json([
            'success' => true,
            'message' => 'Notification sent to all devices',
        ]);
    }
}",
            ),
            callout(
                Tone::Neutral,
                "Why we loop over tokens:",
                vec![Block::Note(vec![
                    Inline::text(
                        "Firebase sends one message per device token. Even if it's one person using one app, each device must be notified separately. This is why we created the ",
                    ),
                    Inline::code("device_tokens"),
                    Inline::text(" table."),
                ])],
            ),
        ])
}

fn admin_notifications() -> Section {
    Section::new("admin-notifications", "Admin / System Notifications")
        .icon("shield")
        .blocks(vec![
            Block::text(
                "Sometimes the system needs to send notifications to other users (not the authenticated one). Examples include order status updates, delivery assignments, or admin announcements.",
            ),
            php(
                r"use App\Models\User;

public function notifyUser(int $userId, FcmService $fcmService)
{
    $user = User::findOrFail($userId);

    $tokens = $user->deviceTokens()->pluck('token');

    foreach ($tokens as $token) {
        $fcmService->send(
            $token,
            'Order Update',
            'Your order is now on the way'
        );
    }

    return response()->json([
        'success' => true,
        'message' => 'User notified successfully',
    ]);
}",
            ),
            Block::Callout(Callout::new(
                Tone::Warning,
                None,
                vec![Block::Paragraph(vec![
                    Inline::strong("Security:"),
                    Inline::text(
                        " This method should be called internally, protected by admin roles, and not exposed publicly.",
                    ),
                ])],
            )),
        ])
}

fn token_cleanup() -> Section {
    Section::new("token-cleanup", "Handling Invalid Tokens")
        .icon("wrench")
        .blocks(vec![
            Block::text(
                "Sometimes Firebase rejects tokens because the app was uninstalled, notifications were disabled, or the token expired. We should clean up invalid tokens automatically.",
            ),
            h4("Updated FcmService with cleanup:"),
            php(
                r"public function send(string $token, string $title, string $body): bool
{
    try {
        $message = CloudMessage::withTarget('token', $token)
            ->withNotification(Notification::create($title, $body));

        $this->messaging->send($message);

        return true;
    } catch (\Kreait\Firebase\Exception\Messaging\NotFound $e) {
        // Token is invalid - remove it from database
        \App\Models\DeviceToken::where('token', $token)->delete();

        return false;
    } catch (\Throwable $e) {
        return false;
    }
}",
            ),
            Block::note(
                "This keeps your database clean automatically by removing tokens that no longer work.",
            ),
        ])
}

fn best_practices() -> Section {
    Section::new("best-practices", "Best Practices")
        .icon("check-circle-2")
        .variant(SectionVariant::Info)
        .blocks(vec![
            h4("When to send notifications:"),
            Block::bullets(&[
                "Order status changed",
                "Delivery assigned",
                "Payment completed",
                "Admin announcement",
            ]),
            h4("Where to trigger notifications:"),
            Block::bullets(&[
                "Services (business logic layer)",
                "Observers (for model events)",
                "Jobs / Queues (for async processing)",
            ]),
            Block::Callout(Callout::new(
                Tone::Danger,
                None,
                vec![Block::Paragraph(vec![
                    Inline::strong("Never"),
                    Inline::text(
                        " send push notifications directly from models. Keep your models clean.",
                    ),
                ])],
            )),
            h4("Performance Tips:"),
            Block::bullets(&[
                "Use queues for sending many notifications",
                "Send asynchronously to avoid blocking API responses",
                "Consider rate limiting for bulk notifications",
            ]),
            callout(
                Tone::Success,
                "Setup Complete!",
                vec![
                    Block::note("At this point, you should have:"),
                    Block::bullets(&[
                        "Firebase service-account JSON downloaded and stored safely",
                        "Credentials uploaded to production server",
                        "File excluded from Git using .gitignore",
                        ".env configured with absolute paths",
                        "Device tokens stored per user in database",
                        "Reusable FcmService class created",
                        "Laravel ready to send push notifications!",
                    ]),
                ],
            ),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_belongs_to_exactly_one_group() {
        let page = notifications_page("October 19, 2026");
        assert_eq!(page.sections.len(), 13);
        for anchor in page.anchors() {
            let owners = page.groups.iter().filter(|g| g.contains(&anchor.id)).count();
            assert_eq!(owners, 1, "{} should be in one group", anchor.id);
        }
    }

    #[test]
    fn group_order_matches_document_order() {
        let page = notifications_page("October 19, 2026");
        let grouped: Vec<Anchor> = page
            .groups
            .iter()
            .flat_map(|group| group.sections.clone())
            .collect();
        assert_eq!(grouped, page.anchors());
    }

    #[test]
    fn updated_date_is_shown_in_header() {
        let page = notifications_page("March 3, 2026");
        let header = page.header.unwrap();
        assert_eq!(header.updated.as_deref(), Some("March 3, 2026"));
        assert_eq!(header.badges, ["Firebase", "Laravel 8-12"]);
    }
}
