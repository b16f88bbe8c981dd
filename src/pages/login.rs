//! Login Page
//!
//! Sign-in form markup. Submission and session handling live behind the
//! accounts API and are not part of the shell.

use leptos::*;
use leptos_router::*;

use crate::routes::Page;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto pt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-1">"Log In"</h1>
                <p class="text-sm text-gray-400 mb-6">"Pick up where you left off"</p>

                <form class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            name="password"
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Log In"
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6 text-center">
                    "New to ReadNest? "
                    <A href=Page::SignUp.path() class="text-primary-400 hover:text-primary-300">
                        "Create an account"
                    </A>
                </p>
            </div>
        </div>
    }
}
