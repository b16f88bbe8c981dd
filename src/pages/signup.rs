//! SignUp Page
//!
//! Registration form markup. Account creation is handled by the accounts
//! API, outside the shell.

use leptos::*;
use leptos_router::*;

use crate::routes::Page;

/// SignUp page component
#[component]
pub fn SignUp() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto pt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-1">"Sign Up"</h1>
                <p class="text-sm text-gray-400 mb-6">"Start tracking what you read"</p>

                <form class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            name="username"
                            placeholder="bookworm"
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

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
                        "Create Account"
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6 text-center">
                    "Already have an account? "
                    <A href=Page::Login.path() class="text-primary-400 hover:text-primary-300">
                        "Log in"
                    </A>
                </p>
            </div>
        </div>
    }
}
