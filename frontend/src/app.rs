use leptos::*;

use crate::components::accordion::{Accordion, AccordionEntry};

fn demo_entries() -> Vec<AccordionEntry> {
    vec![
        AccordionEntry::new("Top", "First section body"),
        AccordionEntry::new("Middle", "Second section body"),
        AccordionEntry::new("Bottom", "Third section body"),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Accordion entries=demo_entries() initial_selected=1usize />
        </main>
    }
}
