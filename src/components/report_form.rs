//! Report Form Component
//!
//! Form for reporting a lost or found item, with an optional photo.

use leptos::html;
use leptos::prelude::*;

use super::type_selector::TypeSelector;
use crate::actions;
use crate::api::ReportDraft;
use crate::loaders::UserLoaders;
use crate::models::ItemKind;

/// Report form. `on_submitted` runs after the backend accepted the report
/// and the form was reset.
#[component]
pub fn ReportForm(loaders: UserLoaders, #[prop(into)] on_submitted: Callback<()>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (kind, set_kind) = signal(ItemKind::Lost);
    let file_input = NodeRef::<html::Input>::new();
    let form_ref = NodeRef::<html::Form>::new();

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_category.set(String::new());
        set_location.set(String::new());
        set_date.set(String::new());
        set_kind.set(ItemKind::Lost);
        // clears the chosen file too
        if let Some(form) = form_ref.get() {
            form.reset();
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ReportDraft {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            location: location.get(),
            date: date.get(),
            kind: kind.get(),
        };
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        actions::submit_report(loaders, draft, file, move || {
            reset();
            on_submitted.run(());
        });
    };

    view! {
        <form id="reportForm" class="report-form glass" node_ref=form_ref on:submit=submit>
            <TypeSelector current_kind=kind on_change=move |k| set_kind.set(k) />

            <div class="form-group">
                <label for="itemTitle">"Title"</label>
                <input
                    id="itemTitle"
                    type="text"
                    required
                    placeholder="e.g. Black leather wallet"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="itemDescription">"Description"</label>
                <textarea
                    id="itemDescription"
                    required
                    placeholder="Distinguishing marks, contents, brand..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="itemCategory">"Category"</label>
                    <input
                        id="itemCategory"
                        type="text"
                        required
                        placeholder="Electronics, Keys, ..."
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="itemLocation">"Location"</label>
                    <input
                        id="itemLocation"
                        type="text"
                        required
                        placeholder="Where was it?"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="itemDate">"Date"</label>
                    <input
                        id="itemDate"
                        type="date"
                        required
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="itemFile">"Photo (optional)"</label>
                <input id="itemFile" type="file" accept="image/*" node_ref=file_input />
            </div>

            <button type="submit" class="btn btn-primary">"Submit Report"</button>
        </form>
    }
}
