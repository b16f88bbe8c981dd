//! Home Page
//!
//! Landing page with calls-to-action into the signup and login flows.

use leptos::*;
use leptos_router::*;

use crate::routes::Page;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            // Hero
            <section class="flex flex-col items-center text-center pt-12">
                <div class="text-6xl mb-6">"📚"</div>
                <h1 class="text-4xl font-bold mb-4">"Welcome to ReadNest"</h1>
                <p class="text-gray-400 max-w-xl mb-8">
                    "Keep your books in shelves, log the pages you read, and
                     watch your reading streak grow day by day."
                </p>
                <div class="flex items-center space-x-4">
                    <A
                        href=Page::SignUp.path()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Get Started"
                    </A>
                    <A
                        href=Page::Login.path()
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Log In"
                    </A>
                </div>
            </section>

            // Feature grid
            <section class="grid md:grid-cols-3 gap-6">
                <FeatureCard
                    icon="🗂"
                    title="Shelves"
                    body="Group your books into shelves and share the public ones."
                />
                <FeatureCard
                    icon="📖"
                    title="Progress"
                    body="Log pages as you read and see how far each book has come."
                />
                <FeatureCard
                    icon="🔥"
                    title="Streaks"
                    body="Read a little every day and keep your streak alive."
                />
            </section>
        </div>
    }
}

/// Single feature tile on the landing page
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h2 class="text-lg font-semibold mb-2">{title}</h2>
            <p class="text-sm text-gray-400">{body}</p>
        </div>
    }
}
