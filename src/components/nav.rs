//! Navigation Component
//!
//! Header navigation bar with logo and one link per declared route.

use leptos::*;
use leptos_router::*;

use crate::routes::Page;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📚"</span>
                        <span class="text-xl font-bold text-white">"ReadNest"</span>
                    </A>

                    // Navigation links, one per entry in the route table
                    <div class="flex items-center space-x-1">
                        {Page::ALL
                            .into_iter()
                            .map(|page| view! {
                                <NavLink href=page.path() label=page.title() />
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
