use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_RESET_MS;
use crate::timing::{BrowserScheduler, Scheduler, Slot, TimerHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub submitted: bool,
}

pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
    Reset,
}

/// Same rule as an `<input type="email">`: something on both sides of a single `@`.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactForm {
    /// Required fields that are still blank, in form order.
    pub fn missing_required(&self) -> Vec<ContactField> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && self.missing_required().is_empty() && looks_like_email(&self.email)
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactAction::Edit(field, value) => {
                let mut next = (*self).clone();
                *next.field_mut(field) = value;
                Rc::new(next)
            }
            ContactAction::Submit if self.can_submit() => Rc::new(Self {
                submitted: true,
                ..(*self).clone()
            }),
            ContactAction::Submit => self,
            ContactAction::Reset => Rc::new(Self::default()),
        }
    }
}

/// Clears the confirmation and every field once the delay has passed.
pub fn schedule_reset<S: Scheduler>(scheduler: &S, dispatch: Callback<ContactAction>) -> S::Handle {
    scheduler.timeout(CONTACT_RESET_MS, move || dispatch.emit(ContactAction::Reset))
}

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    content: &'static str,
    href: &'static str,
}

const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        icon: "✉️",
        title: "Email Us",
        content: "hello@techcomm2025.com",
        href: "mailto:hello@techcomm2025.com",
    },
    ContactInfo {
        icon: "📞",
        title: "Call Us",
        content: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactInfo {
        icon: "📍",
        title: "Visit Us",
        content: "San Francisco, CA",
        href: "#",
    },
];

const SOCIAL_LINKS: [(&str, &str); 3] = [("in", "LinkedIn"), ("𝕏", "Twitter"), ("⌨", "GitHub")];

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let reset_timer = use_mut_ref(Slot::<TimerHandle>::new);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || reset_timer.borrow().clear()
            },
            (),
        );
    }

    let edit_input = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit() {
                log::debug!("Contact form incomplete: {:?}", form.missing_required());
                return;
            }
            log::info!("Contact form submitted");
            form.dispatch(ContactAction::Submit);
            let dispatcher = form.dispatcher();
            reset_timer.borrow().fill(schedule_reset(
                &BrowserScheduler,
                Callback::from(move |action| dispatcher.dispatch(action)),
            ));
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Let's Shape the Future Together"}</h2>
                    <p>{"Ready to transform your connectivity infrastructure? Get in touch with our experts."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Send us a message"}</h3>
                        {
                            if form.submitted {
                                html! {
                                    <div class="contact-confirmation">
                                        <div class="contact-check">{"✅"}</div>
                                        <h4>{"Message Sent Successfully!"}</h4>
                                        <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="contact-form" {onsubmit}>
                                        <div class="contact-row">
                                            <div class="contact-field">
                                                <label for="name">{"Name *"}</label>
                                                <input
                                                    id="name"
                                                    name="name"
                                                    type="text"
                                                    required=true
                                                    placeholder="Your name"
                                                    value={form.name.clone()}
                                                    oninput={edit_input(ContactField::Name)}
                                                />
                                            </div>
                                            <div class="contact-field">
                                                <label for="email">{"Email *"}</label>
                                                <input
                                                    id="email"
                                                    name="email"
                                                    type="email"
                                                    required=true
                                                    placeholder="your.email@company.com"
                                                    value={form.email.clone()}
                                                    oninput={edit_input(ContactField::Email)}
                                                />
                                            </div>
                                        </div>
                                        <div class="contact-field">
                                            <label for="company">{"Company"}</label>
                                            <input
                                                id="company"
                                                name="company"
                                                type="text"
                                                placeholder="Your company name"
                                                value={form.company.clone()}
                                                oninput={edit_input(ContactField::Company)}
                                            />
                                        </div>
                                        <div class="contact-field">
                                            <label for="message">{"Message *"}</label>
                                            <textarea
                                                id="message"
                                                name="message"
                                                rows="5"
                                                required=true
                                                placeholder="Tell us about your project or requirements..."
                                                value={form.message.clone()}
                                                oninput={edit_message}
                                            />
                                        </div>
                                        <button type="submit" class="contact-submit">
                                            <span>{"➤"}</span>
                                            <span>{"Send Message"}</span>
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>

                    <div class="contact-aside">
                        <div class="contact-intro">
                            <h3>{"Get in touch"}</h3>
                            <p>
                                {"Our team of experts is ready to help you navigate the future of telecommunications. "}
                                {"From 5G deployment to IoT integration, we're here to make your vision a reality."}
                            </p>
                        </div>

                        <div class="contact-info">
                            { for CONTACT_INFO.iter().map(|info| html! {
                                <a class="contact-info-item" href={info.href}>
                                    <span class="contact-info-icon">{info.icon}</span>
                                    <span>
                                        <span class="contact-info-title">{info.title}</span>
                                        <span class="contact-info-content">{info.content}</span>
                                    </span>
                                </a>
                            }) }
                        </div>

                        <div class="contact-social">
                            <h4>{"Follow us"}</h4>
                            <div class="contact-social-links">
                                { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                                    <a class="contact-social-link" href="#" aria-label={*label}>{*icon}</a>
                                }) }
                            </div>
                        </div>

                        <div class="contact-hours">
                            <h4>{"Office Hours"}</h4>
                            <p>{"Monday - Friday: 9:00 AM - 6:00 PM PST"}</p>
                            <p>{"Saturday: 10:00 AM - 4:00 PM PST"}</p>
                            <p>{"Sunday: Closed"}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .dark .contact-section {
                        background: #111827;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 3rem;
                    }
                    .contact-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: #fff;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .dark .contact-card {
                        background: #1f2937;
                    }
                    .contact-card h3, .contact-intro h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        color: #111827;
                    }
                    .dark .contact-card h3, .dark .contact-intro h3 {
                        color: #fff;
                    }
                    .contact-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-field {
                        margin-bottom: 1.5rem;
                    }
                    .contact-field label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .dark .contact-field label {
                        color: #d1d5db;
                    }
                    .contact-field input, .contact-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.75rem;
                        background: #fff;
                        color: #111827;
                        resize: none;
                    }
                    .dark .contact-field input, .dark .contact-field textarea {
                        border-color: #4b5563;
                        background: #374151;
                        color: #fff;
                    }
                    .contact-field input:focus, .contact-field textarea:focus {
                        outline: none;
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #3b82f6;
                    }
                    .contact-submit {
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        transition: transform 0.2s ease;
                    }
                    .contact-submit:hover {
                        transform: scale(1.02);
                    }
                    .contact-confirmation {
                        text-align: center;
                        padding: 3rem 0;
                        animation: contact-pop 0.4s ease-out;
                    }
                    .contact-check {
                        font-size: 4rem;
                        margin-bottom: 1rem;
                    }
                    .contact-confirmation h4 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .dark .contact-confirmation h4 {
                        color: #fff;
                    }
                    .contact-confirmation p, .contact-intro p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .dark .contact-confirmation p, .dark .contact-intro p {
                        color: #d1d5db;
                    }
                    .contact-aside {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-info-item {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #fff;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s ease;
                    }
                    .dark .contact-info-item {
                        background: #1f2937;
                    }
                    .contact-info-item:hover {
                        transform: scale(1.02);
                    }
                    .contact-info-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                    }
                    .contact-info-title {
                        display: block;
                        font-weight: 600;
                        color: #111827;
                    }
                    .dark .contact-info-title {
                        color: #fff;
                    }
                    .contact-info-content {
                        color: #4b5563;
                    }
                    .dark .contact-info-content {
                        color: #d1d5db;
                    }
                    .contact-social h4, .contact-hours h4 {
                        font-weight: 600;
                        margin-bottom: 1rem;
                        color: #111827;
                    }
                    .dark .contact-social h4 {
                        color: #fff;
                    }
                    .contact-social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .contact-social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        color: #4b5563;
                        font-weight: 700;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .dark .contact-social-link {
                        background: #1f2937;
                        color: #d1d5db;
                    }
                    .contact-hours {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        color: #fff;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                    }
                    .contact-hours h4 {
                        color: #fff;
                    }
                    .contact-hours p {
                        margin: 0.25rem 0;
                        font-size: 0.875rem;
                        opacity: 0.9;
                    }
                    @keyframes contact-pop {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::timing::manual::ManualScheduler;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            message: "Need 5G coverage".into(),
            submitted: false,
        }
    }

    fn shared(form: ContactForm) -> (Rc<RefCell<Rc<ContactForm>>>, Callback<ContactAction>) {
        let state = Rc::new(RefCell::new(Rc::new(form)));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        };
        (state, dispatch)
    }

    #[test]
    fn edits_touch_only_their_field() {
        let form = Rc::new(ContactForm::default())
            .reduce(ContactAction::Edit(ContactField::Company, "Acme".into()));
        assert_eq!(form.company, "Acme");
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = Rc::new(ContactForm {
            name: "   ".into(),
            ..filled()
        });
        assert_eq!(form.missing_required(), vec![ContactField::Name]);
        assert!(!form.reduce(ContactAction::Submit).submitted);
    }

    #[test]
    fn company_is_optional() {
        assert!(filled().missing_required().is_empty());
        assert!(filled().can_submit());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = ContactForm {
            email: "not-an-email".into(),
            ..filled()
        };
        assert!(form.missing_required().is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email(" ada@example.com "));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("ada lovelace@example.com"));
    }

    #[test]
    fn submission_shows_confirmation_then_resets_everything() {
        let scheduler = ManualScheduler::new();
        let (state, dispatch) = shared(filled());

        dispatch.emit(ContactAction::Submit);
        let _reset = schedule_reset(&scheduler, dispatch.clone());
        assert!(state.borrow().submitted);
        assert_eq!(state.borrow().name, "Ada");

        scheduler.advance(u64::from(CONTACT_RESET_MS) - 1);
        assert!(state.borrow().submitted);

        scheduler.advance(1);
        assert_eq!(**state.borrow(), ContactForm::default());
    }

    #[test]
    fn unmount_before_reset_cancels_it() {
        let scheduler = ManualScheduler::new();
        let (state, dispatch) = shared(filled());
        let slot = Slot::new();

        dispatch.emit(ContactAction::Submit);
        slot.fill(schedule_reset(&scheduler, dispatch));
        slot.clear();
        scheduler.advance(u64::from(CONTACT_RESET_MS) * 2);

        assert!(state.borrow().submitted);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn resubmitting_while_confirmed_is_ignored() {
        let form = Rc::new(filled()).reduce(ContactAction::Submit);
        assert!(!form.can_submit());
        let again = form.clone().reduce(ContactAction::Submit);
        assert!(Rc::ptr_eq(&form, &again));
    }
}
