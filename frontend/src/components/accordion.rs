use leptos::*;
use shared::AccordionState;

/// One collapsible section of an [`Accordion`].
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionEntry {
    pub title: String,
    pub body: String,
}

impl AccordionEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

fn entry_class(expanded: bool) -> &'static str {
    if expanded {
        "accordion-entry accordion-entry-state-expanded"
    } else {
        "accordion-entry"
    }
}

/// Accordion with mutually exclusive entries.
///
/// Exactly the selected entry carries the expanded marker class. Clicking an
/// entry header selects that entry; clicking the header of the entry that is
/// already expanded leaves the accordion untouched and skips the re-render.
#[component]
pub fn Accordion(
    entries: Vec<AccordionEntry>,
    #[prop(optional, into)] initial_selected: Option<usize>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let entry_count = entries.len();
    let initial_state = match initial_selected {
        Some(index) => AccordionState::with_selected(entry_count, index)
            .unwrap_or_else(|_| AccordionState::new(entry_count)),
        None => AccordionState::new(entry_count),
    };
    let state = create_rw_signal(initial_state);

    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    view! {
        <div class=full_class>
            {entries.into_iter().enumerate().map(|(index, entry)| {
                let class = move || entry_class(state.with(|s| s.is_expanded(index)));
                let handle_click = move |_: web_sys::MouseEvent| {
                    // No signal update for the already-expanded entry, so no
                    // re-render is queued for it either.
                    if state.with_untracked(|s| s.is_expanded(index)) {
                        return;
                    }
                    state.update(|s| {
                        s.click(index);
                    });
                };
                view! {
                    <div class=class>
                        <div class="accordion-entry-header" on:click=handle_click>
                            {entry.title}
                        </div>
                        <div class="accordion-entry-body">
                            {entry.body}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
