use contracts::shared::plugins::SettingKind;
use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use super::super::model::validation::CLASS_ERROR_HIDDEN;
use super::super::model::{
    format_value, initial_feedback, reflect, Constraint, Marker, Validity,
};
use super::dom::{has_marker, target_element};
use super::popover::PopoverHelp;

/// Описание поля настройки для отрисовки
#[derive(Clone, Debug)]
pub struct SettingFieldSpec {
    pub id: String,
    pub label: String,
    pub help: String,
    pub value: String,
    pub kind: SettingKind,
    pub options: Vec<String>,
    pub constraint: Constraint,
}

/// Native validity of the event target, if the target is a setting input
fn read_validity(ev: &Event) -> Option<Validity> {
    let el = target_element(ev)?;
    if !has_marker(&el, Marker::SettingInput) {
        return None;
    }
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(Validity::from_valid(input.validity().valid()));
    }
    el.dyn_ref::<HtmlSelectElement>()
        .map(|select| Validity::from_valid(select.validity().valid()))
}

#[component]
pub fn SettingField(spec: SettingFieldSpec) -> impl IntoView {
    let SettingFieldSpec {
        id,
        label,
        help,
        value,
        kind,
        options,
        constraint,
    } = spec;

    let value = format_value(&value);
    let has_error_element = !constraint.is_empty();
    // сохранённое значение проверяется сразу, дальше решает браузер
    let feedback = RwSignal::new(initial_feedback(&constraint, &value));

    let check = move |ev: &Event| {
        let Some(validity) = read_validity(ev) else {
            return;
        };
        if let Some(next) = reflect(validity, has_error_element) {
            feedback.set(Some(next));
        }
    };
    let on_input = move |ev: Event| check(&ev);
    let on_change = move |ev: Event| check(&ev);
    let on_click = move |ev: MouseEvent| {
        let ev: &Event = &ev;
        check(ev)
    };

    let field_class = move || {
        let state = feedback.get().map(|f| f.field_class()).unwrap_or("");
        format!("form__input {}", state)
    };

    let control = match kind {
        SettingKind::Select => view! {
            <select
                id=id.clone()
                name=id.clone()
                data-setting-input=""
                required=constraint.required()
                class=field_class
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        let selected = opt == value;
                        let opt_value = opt.clone();
                        view! { <option value=opt_value selected=selected>{opt}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        SettingKind::Check => view! {
            <input
                id=id.clone()
                name=id.clone()
                type="checkbox"
                data-setting-input=""
                prop:checked={value == "yes"}
                class=field_class
            />
        }
        .into_any(),
        _ => view! {
            <input
                id=id.clone()
                name=id.clone()
                type={kind.input_type()}
                data-setting-input=""
                value=value
                pattern=constraint.pattern_attr()
                required=constraint.required()
                class=field_class
            />
        }
        .into_any(),
    };

    let help_view = (!help.is_empty()).then(|| view! { <PopoverHelp name=id.clone() text=help /> });

    let error_view = has_error_element.then(|| {
        let error_class = move || {
            feedback
                .get()
                .map(|f| f.error_class())
                .unwrap_or(CLASS_ERROR_HIDDEN)
        };
        view! {
            <p data-invalid=id.clone() class=move || format!("form__error {}", error_class())>
                "Invalid value"
            </p>
        }
    });

    view! {
        <div
            class="setting-field"
            on:input=on_input
            on:change=on_change
            on:click=on_click
        >
            <div class="setting-field__header">
                <label for=id.clone() class="form__label">{label}</label>
                {help_view}
            </div>
            {control}
            {error_view}
        </div>
    }
}
