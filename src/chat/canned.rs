// src/chat/canned.rs
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Career,
    Mentorship,
    Events,
    Default,
}

const GREETING: &[&str] = &[
    "Hello! I'm Asha, your AI assistant. How can I help you today?",
    "Hi there! I'm here to assist you. What would you like to know?",
    "Welcome! I'm Asha, ready to help you with your questions.",
];

const CAREER: &[&str] = &[
    "I can help you with career advice, job opportunities, and professional development. What specific area would you like to explore?",
    "Looking for career guidance? I can help with job search tips, interview preparation, and career planning.",
    "I specialize in career development and women empowerment. How can I assist you in your professional journey?",
];

const MENTORSHIP: &[&str] = &[
    "I can connect you with mentorship opportunities and provide guidance on finding the right mentor.",
    "Looking for mentorship? I can help you understand different mentorship programs and how to benefit from them.",
    "Mentorship is a great way to grow professionally. I can help you explore mentorship options.",
];

const EVENTS: &[&str] = &[
    "I can help you find upcoming events, webinars, and networking opportunities.",
    "Looking for professional events? I can guide you to relevant workshops and networking sessions.",
    "I can help you discover events that match your professional interests and goals.",
];

const DEFAULT: &[&str] = &[
    "I understand your question. Let me help you with that. Could you please provide more details about what you'd like to know?",
    "I'm here to help! Could you please rephrase your question or provide more context?",
    "I'd be happy to assist you. Could you please clarify what you're looking for?",
];

/// Pick a topic by substring match on the lower-cased message, first hit wins.
pub fn classify(message: &str) -> Topic {
    let message = message.to_lowercase();

    if contains_any(&message, &["hello", "hi"]) {
        Topic::Greeting
    } else if contains_any(&message, &["career", "job"]) {
        Topic::Career
    } else if contains_any(&message, &["mentor"]) {
        Topic::Mentorship
    } else if contains_any(&message, &["event", "webinar"]) {
        Topic::Events
    } else {
        Topic::Default
    }
}

fn contains_any(message: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| message.contains(*needle))
}

pub fn phrases(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Greeting => GREETING,
        Topic::Career => CAREER,
        Topic::Mentorship => MENTORSHIP,
        Topic::Events => EVENTS,
        Topic::Default => DEFAULT,
    }
}

pub fn canned_reply(message: &str) -> &'static str {
    phrases(classify(message))
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT[0])
}
