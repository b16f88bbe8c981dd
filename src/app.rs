//! App Root Component
//!
//! Root composition unit: installs the client-side router and declares the
//! static path-to-page mapping.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Dashboard, Home, Login, SignUp};
use crate::routes::Page;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    // Exact-match routes only. An unmatched path renders
                    // nothing; no catch-all is declared.
                    <Routes>
                        <Route path=Page::Home.path() view=Home />
                        <Route path=Page::Login.path() view=Login />
                        <Route path=Page::Dashboard.path() view=Dashboard />
                        <Route path=Page::SignUp.path() view=SignUp />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Static footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"ReadNest"</span>
                <span>"Track your shelves, one page at a time"</span>
            </div>
        </footer>
    }
}
