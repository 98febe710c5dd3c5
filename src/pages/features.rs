use yew::prelude::*;

pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub heading: &'static str,
    pub points: [&'static str; 5],
    pub image: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: "billing",
        title: "Smart Billing",
        icon: "📊",
        description: "Advanced billing solutions with real-time processing and automated reconciliation.",
        heading: "Next-Generation Billing Platform",
        points: [
            "Real-time usage tracking and billing",
            "Multi-currency and multi-tenant support",
            "Automated invoice generation",
            "Advanced analytics and reporting",
            "API-first architecture for seamless integration",
        ],
        image: "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Feature {
        id: "charging",
        title: "Dynamic Charging",
        icon: "⚡",
        description: "Flexible charging models with AI-powered optimization and real-time adjustments.",
        heading: "Intelligent Charging Solutions",
        points: [
            "Dynamic pricing based on demand",
            "AI-powered rate optimization",
            "Real-time charging adjustments",
            "Usage-based and subscription models",
            "Fraud detection and prevention",
        ],
        image: "https://images.pexels.com/photos/8358834/pexels-photo-8358834.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Feature {
        id: "catalog",
        title: "Service Catalog",
        icon: "🌐",
        description: "Comprehensive service management with automated provisioning and lifecycle management.",
        heading: "Unified Service Catalog",
        points: [
            "Centralized service management",
            "Automated service provisioning",
            "Digital product catalog",
            "Bundle and package management",
            "Self-service customer portal",
        ],
        image: "https://images.pexels.com/photos/7887807/pexels-photo-7887807.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Feature {
        id: "events",
        title: "Event Processing",
        icon: "🔗",
        description: "Real-time event processing with advanced analytics and intelligent routing.",
        heading: "Real-Time Event Engine",
        points: [
            "High-throughput event processing",
            "Real-time analytics and insights",
            "Intelligent event routing",
            "Custom event triggers and actions",
            "Scalable microservices architecture",
        ],
        image: "https://images.pexels.com/photos/8358850/pexels-photo-8358850.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];

/// Active tab over a fixed, non-empty set of tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelector {
    active: usize,
    len: usize,
}

impl TabSelector {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "tab selector needs at least one tab");
        Self {
            active: 0,
            len: len.max(1),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Activates `index`. Returns whether anything changed; indices outside
    /// the tab set are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let tabs = use_state(|| TabSelector::new(FEATURES.len()));
    let active = &FEATURES[tabs.active()];

    let select = |index: usize| {
        let tabs = tabs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tabs;
            if next.select(index) {
                tabs.set(next);
            }
        })
    };

    html! {
        <section id="features" class="features-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Powerful Features for Modern Telecom"}</h2>
                    <p>{"Comprehensive solutions designed to accelerate your digital transformation"}</p>
                </div>

                <div class="feature-tabs">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <button
                            key={feature.id}
                            class={classes!("feature-tab", (tabs.active() == index).then(|| "active"))}
                            onclick={select(index)}
                        >
                            <span>{feature.icon}</span>
                            <span class="feature-tab-title">{feature.title}</span>
                        </button>
                    }) }
                </div>

                <div class="feature-panel" key={active.id}>
                    <div>
                        <h3>{active.heading}</h3>
                        <ul class="feature-points">
                            { for active.points.iter().enumerate().map(|(index, point)| html! {
                                <li style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}>
                                    <span class="feature-bullet"></span>
                                    <span>{*point}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="feature-image">
                        <img src={active.image} alt={active.heading} loading="lazy" />
                        <div class="feature-caption">
                            <div class="feature-caption-title">
                                <span>{active.icon}</span>
                                <span>{active.title}</span>
                            </div>
                            <p>{active.description}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .features-section {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .dark .features-section {
                        background: #111827;
                    }
                    .feature-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.25rem;
                        max-width: 56rem;
                        margin: 0 auto 3rem;
                        padding: 0.5rem;
                        border-radius: 1rem;
                        background: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .dark .feature-tabs {
                        background: #1f2937;
                    }
                    .feature-tab {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: none;
                        cursor: pointer;
                        font-weight: 500;
                        color: #4b5563;
                        transition: all 0.3s ease;
                    }
                    .dark .feature-tab {
                        color: #d1d5db;
                    }
                    .feature-tab.active {
                        color: #fff;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        box-shadow: 0 10px 15px rgba(59, 130, 246, 0.3);
                    }
                    .feature-panel {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                        animation: feature-slide 0.5s ease-out;
                    }
                    .feature-panel h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .dark .feature-panel h3 {
                        color: #fff;
                    }
                    .feature-points {
                        list-style: none;
                        padding: 0;
                    }
                    .feature-points li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                        font-size: 1.125rem;
                        color: #4b5563;
                        animation: feature-slide 0.5s ease-out both;
                    }
                    .dark .feature-points li {
                        color: #d1d5db;
                    }
                    .feature-bullet {
                        flex-shrink: 0;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle, #fff 25%, #3b82f6 30%);
                    }
                    .feature-image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .feature-image img {
                        width: 100%;
                        height: 20rem;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .feature-image:hover img {
                        transform: scale(1.1);
                    }
                    .feature-caption {
                        position: absolute;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.9);
                    }
                    .dark .feature-caption {
                        background: rgba(31, 41, 55, 0.9);
                        color: #d1d5db;
                    }
                    .feature-caption-title {
                        display: flex;
                        gap: 0.5rem;
                        font-weight: 600;
                    }
                    @keyframes feature-slide {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_tab() {
        assert_eq!(TabSelector::new(FEATURES.len()).active(), 0);
    }

    #[test]
    fn selecting_any_tab_makes_it_active() {
        let mut tabs = TabSelector::new(4);
        for from in 0..4 {
            for to in 0..4 {
                tabs.select(from);
                tabs.select(to);
                assert_eq!(tabs.active(), to);
            }
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        let mut tabs = TabSelector::new(4);
        assert!(tabs.select(2));
        let before = tabs;
        assert!(!tabs.select(2));
        assert_eq!(tabs, before);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut tabs = TabSelector::new(4);
        tabs.select(1);
        assert!(!tabs.select(4));
        assert_eq!(tabs.active(), 1);
    }

    #[test]
    fn every_feature_has_five_points() {
        assert!(FEATURES.iter().all(|f| f.points.iter().all(|p| !p.is_empty())));
    }
}
