//! About Page
//!
//! Static experience, skills, and education content; no state.

use leptos::prelude::*;

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Senior AI Engineer",
        company: "TechCorp AI",
        period: "2022 - Present",
        summary: "Leading the deployment of large-scale ML systems serving millions of users.",
    },
    Experience {
        title: "Machine Learning Engineer",
        company: "DataFlow Solutions",
        period: "2020 - 2022",
        summary: "Built real-time recommendation pipelines and model monitoring tooling.",
    },
    Experience {
        title: "Software Engineer",
        company: "StartupXYZ",
        period: "2019 - 2020",
        summary: "Full-stack product work with a focus on data-heavy backends.",
    },
];

const SKILLS: &[(&str, &[&str])] = &[
    ("Machine Learning", &["PyTorch", "TensorFlow", "scikit-learn", "ONNX"]),
    ("Engineering", &["Rust", "Python", "PostgreSQL", "Kubernetes"]),
    ("NLP & LLMs", &["Transformers", "RAG", "Vector Search", "Fine-tuning"]),
];

const EDUCATION: &[(&str, &str)] = &[
    ("Master of Science in Artificial Intelligence", "2017 - 2019"),
    ("Bachelor of Science in Computer Science", "2013 - 2017"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h1>"About Me"</h1>

            <section>
                <h2>"Experience"</h2>
                {EXPERIENCES.iter().map(|exp| view! {
                    <div class="experience-entry">
                        <h3>{exp.title}</h3>
                        <p class="company">{exp.company}</p>
                        <span class="period">{exp.period}</span>
                        <p>{exp.summary}</p>
                    </div>
                }).collect_view()}
            </section>

            <section>
                <h2>"Skills"</h2>
                {SKILLS.iter().map(|(category, items)| view! {
                    <div class="skill-group">
                        <h3>{*category}</h3>
                        <div class="tag-row">
                            {items.iter().map(|skill| view! {
                                <span class="tag">{*skill}</span>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </section>

            <section>
                <h2>"Education"</h2>
                {EDUCATION.iter().map(|(degree, period)| view! {
                    <div class="education-entry">
                        <h3>{*degree}</h3>
                        <span class="period">{*period}</span>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
