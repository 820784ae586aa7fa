//! Submission Diagnostics Panel
//!
//! Debug readout above the user's own submissions.

use leptos::prelude::*;

use crate::store::{DiagPanel, DiagTone};

fn tone_class(tone: DiagTone) -> &'static str {
    match tone {
        DiagTone::Plain => "diag-line",
        DiagTone::Good => "diag-line good",
        DiagTone::Bad => "diag-line bad",
    }
}

#[component]
pub fn DiagPanelView(
    #[prop(into)] panel: Signal<DiagPanel>,
    /// Re-sync: run the submissions loader again
    #[prop(into)]
    on_resync: Callback<()>,
) -> impl IntoView {
    view! {
        <div id="debugPanel" class="diag-panel">
            <div class="diag-header">
                <strong>"Diagnostics"</strong>
                <button class="btn btn-outline btn-small" on:click=move |_| on_resync.run(())>
                    "Re-sync"
                </button>
            </div>
            {move || panel.with(|p| {
                p.lines
                    .iter()
                    .map(|line| view! { <div class=tone_class(line.tone)>{line.text.clone()}</div> })
                    .collect_view()
            })}
            {move || panel.with(|p| p.status.clone()).map(|status| view! {
                <div class="diag-line pending">{status}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class(DiagTone::Plain), "diag-line");
        assert_eq!(tone_class(DiagTone::Bad), "diag-line bad");
    }
}
