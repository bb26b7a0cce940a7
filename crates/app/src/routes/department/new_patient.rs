use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{age_on, NewPatientForm, PatientSummary};
use shared_ui::{Button, ButtonVariant, FormSelect, Input, Modal};

pub const MODAL_ID: &str = "modalNewPatient";

const DELIVERY_MODES: [&str; 4] = ["Walk-in", "Referral", "Emergency", "Appointment"];
const SERVICES: [&str; 5] = ["Consultation", "Laboratory", "Diagnostics", "Pharmacy", "Nursing"];

fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Form state as typed, before conversion into a [`NewPatientForm`].
#[derive(Debug, Clone, Default, PartialEq)]
struct Draft {
    full_name: String,
    dob: String,
    delivery_mode: String,
    service: String,
    nok_name: String,
    nok_phone: String,
    file_no: String,
    patient_id: String,
}

impl Draft {
    fn to_form(&self) -> NewPatientForm {
        NewPatientForm {
            full_name: self.full_name.clone(),
            dob: parse_dob(&self.dob),
            delivery_mode: self.delivery_mode.clone(),
            service: self.service.clone(),
            nok_name: self.nok_name.trim().to_string(),
            nok_phone: self.nok_phone.trim().to_string(),
            file_no: self.file_no.trim().parse().ok(),
            patient_id: Some(self.patient_id.trim().to_string()).filter(|id| !id.is_empty()),
        }
    }

    fn age_text(&self) -> String {
        parse_dob(&self.dob)
            .and_then(|dob| age_on(dob, Local::now().date_naive()))
            .map(|age| age.to_string())
            .unwrap_or_default()
    }
}

/// New-patient registration modal with its live summary panel.
///
/// Validation of required fields happens here; numbering and saving are
/// left to `on_submit`.
#[component]
pub fn NewPatientModal(
    open: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<NewPatientForm>,
    on_invalid: EventHandler<Vec<&'static str>>,
    summary: Option<PatientSummary>,
) -> Element {
    let mut draft = use_signal(Draft::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = draft.read().to_form();
        let missing = form.missing_fields();
        if !missing.is_empty() {
            on_invalid.call(missing);
            return;
        }
        on_submit.call(form);
        draft.set(Draft::default());
    };

    let current = draft();
    let age = current.age_text();

    rsx! {
        Modal {
            open: open,
            title: "New Patient Registration",
            on_close: move |_| on_close.call(()),
            div { id: MODAL_ID, class: "np-layout",
                form { id: "newPatientForm", class: "np-form", onsubmit: handle_submit,
                    Input {
                        label: "Full Name",
                        required: true,
                        value: current.full_name.clone(),
                        on_input: move |e: FormEvent| draft.write().full_name = e.value(),
                    }
                    div { class: "np-row",
                        Input {
                            label: "Date of Birth",
                            input_type: "date",
                            id: "dob",
                            value: current.dob.clone(),
                            on_input: move |e: FormEvent| draft.write().dob = e.value(),
                        }
                        Input { label: "Age", id: "age", value: age, disabled: true }
                    }
                    div { class: "np-row",
                        FormSelect {
                            label: "Delivery Mode",
                            placeholder: "Select mode",
                            value: current.delivery_mode.clone(),
                            onchange: move |e: Event<FormData>| draft.write().delivery_mode = e.value(),
                            for mode in DELIVERY_MODES {
                                option { value: mode, "{mode}" }
                            }
                        }
                        FormSelect {
                            label: "Service *",
                            placeholder: "Select service",
                            value: current.service.clone(),
                            onchange: move |e: Event<FormData>| draft.write().service = e.value(),
                            for service in SERVICES {
                                option { value: service, "{service}" }
                            }
                        }
                    }
                    div { class: "np-row",
                        Input {
                            label: "Next of Kin",
                            value: current.nok_name.clone(),
                            on_input: move |e: FormEvent| draft.write().nok_name = e.value(),
                        }
                        Input {
                            label: "Next of Kin Phone",
                            input_type: "tel",
                            value: current.nok_phone.clone(),
                            on_input: move |e: FormEvent| draft.write().nok_phone = e.value(),
                        }
                    }
                    div { class: "np-row",
                        Input {
                            label: "File No",
                            id: "fileNo",
                            input_type: "number",
                            placeholder: "Auto",
                            value: current.file_no.clone(),
                            on_input: move |e: FormEvent| draft.write().file_no = e.value(),
                        }
                        Input {
                            label: "Patient ID",
                            id: "patientId",
                            placeholder: "Auto",
                            value: current.patient_id.clone(),
                            on_input: move |e: FormEvent| draft.write().patient_id = e.value(),
                        }
                    }
                    div { class: "np-actions",
                        Button { variant: ButtonVariant::Secondary, onclick: move |_| on_close.call(()), "Cancel" }
                        Button { variant: ButtonVariant::Primary, button_type: "submit", "Save Patient" }
                    }
                }

                aside { id: "liveSummary", class: "np-summary",
                    h4 { "Live Summary" }
                    {match summary {
                        Some(s) => {
                            let date = s.date.format("%d/%m/%Y").to_string();
                            let age = s.age_text();
                            let next_of_kin = s.next_of_kin();
                            rsx! {
                                p { strong { "Date: " } "{date}" }
                                p { strong { "File No: " } "{s.file_no}" }
                                p { strong { "Patient ID: " } "{s.patient_id}" }
                                p { strong { "Name: " } "{s.full_name}" }
                                p { strong { "Age: " } "{age}" }
                                p { strong { "Delivery Mode: " } "{s.delivery_mode}" }
                                p { strong { "Service: " } "{s.service}" }
                                p { strong { "Next of Kin: " } "{next_of_kin}" }
                                hr {}
                                small { "Auto-tracking enabled for this registration." }
                            }
                        }
                        None => rsx! {
                            p { class: "muted", "No registration yet." }
                        },
                    }}
                }
            }
        }
    }
}
