use yew::prelude::*;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    icon: &'static str,
    tags: [&'static str; 3],
    accent: &'static str,
    stats: [(&'static str, &'static str); 3],
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "5G Network Infrastructure",
        description: "Ultra-fast 5G deployment with edge computing capabilities and AI-powered optimization.",
        image: "https://images.pexels.com/photos/8358834/pexels-photo-8358834.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "⚡",
        tags: ["5G", "Edge Computing", "AI"],
        accent: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        stats: [("coverage", "95%"), ("speed", "10Gbps"), ("latency", "<1ms")],
    },
    Project {
        title: "IoT Ecosystem Platform",
        description: "Comprehensive IoT management with real-time analytics and device orchestration.",
        image: "https://images.pexels.com/photos/7887807/pexels-photo-7887807.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "🌐",
        tags: ["IoT", "Analytics", "Cloud"],
        accent: "linear-gradient(135deg, #22c55e, #10b981)",
        stats: [("devices", "50M+"), ("uptime", "99.9%"), ("locations", "195")],
    },
    Project {
        title: "Quantum Security Suite",
        description: "Next-generation security with quantum encryption and zero-trust architecture.",
        image: "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "🛡️",
        tags: ["Quantum", "Security", "Encryption"],
        accent: "linear-gradient(135deg, #a855f7, #ec4899)",
        stats: [("encryption", "Quantum"), ("incidents", "0"), ("compliance", "100%")],
    },
    Project {
        title: "Smart City Integration",
        description: "Connected infrastructure solutions for intelligent urban environments.",
        image: "https://images.pexels.com/photos/8358850/pexels-photo-8358850.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "📱",
        tags: ["Smart City", "Integration", "Sustainability"],
        accent: "linear-gradient(135deg, #f97316, #ef4444)",
        stats: [("cities", "50+"), ("sensors", "2M+"), ("efficiency", "+40%")],
    },
];

/// Leaving a card only clears the hover if that card still holds it.
fn after_leave(hovered: Option<usize>, left: usize) -> Option<usize> {
    hovered.filter(|current| *current != left)
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section class="showcase-section">
            <div class="section-inner">
                <div class="section-header showcase-header">
                    <h2>{"Innovation Showcase"}</h2>
                    <p>{"Discover our cutting-edge solutions that are shaping the future of global connectivity"}</p>
                </div>

                <div class="showcase-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(after_leave(*hovered, index)))
                        };
                        let is_hovered = *hovered == Some(index);

                        html! {
                            <div
                                key={project.title}
                                class={classes!("showcase-card", is_hovered.then(|| "hovered"))}
                                style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="showcase-tint" style={format!("background: {};", project.accent)}></div>
                                <div class="showcase-image">
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <div class="showcase-icon">{project.icon}</div>
                                </div>
                                <div class="showcase-body">
                                    <div class="showcase-tags">
                                        { for project.tags.iter().map(|tag| html! {
                                            <span class="showcase-tag">{*tag}</span>
                                        }) }
                                    </div>
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <div class="showcase-stats">
                                        { for project.stats.iter().map(|(key, value)| html! {
                                            <div class="showcase-stat">
                                                <div class="showcase-stat-value">{*value}</div>
                                                <div class="showcase-stat-key">{*key}</div>
                                            </div>
                                        }) }
                                    </div>
                                    <div class="showcase-actions">
                                        <button class="showcase-details">
                                            <span>{"↗"}</span>
                                            <span>{"View Details"}</span>
                                        </button>
                                        <button class="showcase-code" aria-label="View code">{"</>"}</button>
                                    </div>
                                </div>
                                <div class="showcase-shimmer"></div>
                            </div>
                        }
                    }) }
                </div>

                <div class="showcase-cta">
                    <button>{"Explore All Solutions"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .showcase-section {
                        padding: 5rem 0;
                        overflow: hidden;
                        color: #fff;
                        background: #111827;
                    }
                    .showcase-header h2 {
                        color: #fff;
                    }
                    .showcase-header p {
                        color: #d1d5db;
                    }
                    .showcase-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 2rem;
                    }
                    .showcase-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid #374151;
                        background: linear-gradient(135deg, #1f2937, #111827);
                        transition: transform 0.5s ease, border-color 0.5s ease;
                        animation: showcase-rise 0.6s ease-out both;
                    }
                    .showcase-card.hovered {
                        transform: scale(1.02) translateY(-5px);
                        border-color: #4b5563;
                    }
                    .showcase-tint {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .showcase-card.hovered .showcase-tint {
                        opacity: 0.1;
                    }
                    .showcase-image {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }
                    .showcase-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .showcase-card.hovered .showcase-image img {
                        transform: scale(1.1);
                    }
                    .showcase-icon {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        transition: transform 0.5s ease;
                    }
                    .showcase-card.hovered .showcase-icon {
                        transform: rotate(360deg);
                    }
                    .showcase-body {
                        position: relative;
                        padding: 1.5rem;
                    }
                    .showcase-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .showcase-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #93c5fd;
                        background: rgba(59, 130, 246, 0.2);
                        border: 1px solid rgba(59, 130, 246, 0.3);
                    }
                    .showcase-body h3 {
                        margin: 0 0 0.75rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        transition: color 0.3s ease;
                    }
                    .showcase-card.hovered h3 {
                        color: #93c5fd;
                    }
                    .showcase-body p {
                        color: #d1d5db;
                        line-height: 1.6;
                    }
                    .showcase-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        text-align: center;
                    }
                    .showcase-stat-value {
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .showcase-stat-key {
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-transform: capitalize;
                    }
                    .showcase-actions {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .showcase-details, .showcase-code {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .showcase-details {
                        flex: 1;
                        color: #93c5fd;
                        background: rgba(59, 130, 246, 0.2);
                        border: 1px solid rgba(59, 130, 246, 0.3);
                    }
                    .showcase-code {
                        color: #d1d5db;
                        background: rgba(55, 65, 81, 0.5);
                        border: 1px solid rgba(75, 85, 99, 0.3);
                    }
                    .showcase-shimmer {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.05), transparent);
                        transform: skewX(-12deg) translateX(-100%);
                    }
                    .showcase-card.hovered .showcase-shimmer {
                        opacity: 1;
                        animation: showcase-shimmer 2s ease-in-out infinite;
                    }
                    .showcase-cta {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .showcase-cta button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .showcase-cta button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 20px 40px rgba(59, 130, 246, 0.3);
                    }
                    @keyframes showcase-rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes showcase-shimmer {
                        to { transform: skewX(-12deg) translateX(100%); }
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
    fn leaving_the_hovered_card_clears_it() {
        assert_eq!(after_leave(Some(2), 2), None);
    }

    #[test]
    fn stale_leave_keeps_the_newer_hover() {
        assert_eq!(after_leave(Some(1), 0), Some(1));
        assert_eq!(after_leave(None, 3), None);
    }

    #[test]
    fn every_project_has_three_stats() {
        for project in &PROJECTS {
            assert!(project.stats.iter().all(|(key, value)| !key.is_empty() && !value.is_empty()));
        }
    }
}
