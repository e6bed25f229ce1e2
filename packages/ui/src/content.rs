//! Static copy for the landing and auth pages.

/// Headline number in the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Pain point in the "Confused About Your Career?" section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Problem {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// One star per rating point, capped at five.
    pub fn stars(&self) -> String {
        "⭐".repeat(usize::from(self.rating.min(5)))
    }
}

/// Sign-in provider advertised under the login and register panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialProvider {
    pub icon: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "10,000+", label: "Students Guided", icon: "👥" },
    Stat { value: "500+", label: "Career Paths", icon: "🎯" },
    Stat { value: "95%", label: "Success Rate", icon: "📈" },
    Stat { value: "24/7", label: "Expert Support", icon: "☕" },
];

pub const PROBLEMS: [Problem; 3] = [
    Problem { icon: "🤔", text: "Not sure which field suits you?" },
    Problem { icon: "🛠️", text: "Don't know what skills you're missing?" },
    Problem { icon: "😰", text: "Afraid of choosing the wrong career?" },
];

pub const FEATURES: [Feature; 6] = [
    Feature { icon: "🧠", title: "AI Career Assessment", desc: "Personality & skill-based recommendations" },
    Feature { icon: "📊", title: "Skill Gap Analysis", desc: "Find missing skills for your dream job" },
    Feature { icon: "🗺", title: "Personalized Roadmap", desc: "Step-by-step learning path" },
    Feature { icon: "🎯", title: "Job Role Explorer", desc: "Explore trending career options" },
    Feature { icon: "📈", title: "Industry Trends", desc: "See future demand & salary insights" },
    Feature { icon: "💼", title: "Resume Analyzer", desc: "Improve your resume with AI" },
];

pub const STEPS: [Step; 3] = [
    Step { step: "1️⃣", title: "Take Assessment", desc: "Complete our AI-powered career assessment", icon: "📝" },
    Step { step: "2️⃣", title: "Get Career Report", desc: "Receive detailed insights & recommendations", icon: "📊" },
    Step { step: "3️⃣", title: "Follow Roadmap", desc: "Start your personalized learning journey", icon: "🗺️" },
];

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Priya Sharma",
        role: "Software Engineer",
        text: "This platform helped me switch from confusion to clarity in just 2 weeks!",
        rating: 5,
    },
    Testimonial {
        name: "Rahul Verma",
        role: "Product Manager",
        text: "The skill gap analysis showed exactly what I was missing. Landed my dream job!",
        rating: 5,
    },
    Testimonial {
        name: "Ananya Patel",
        role: "Data Scientist",
        text: "Personalized roadmap made learning so structured. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Arjun Reddy",
        role: "UX Designer",
        text: "From zero experience to portfolio ready in 3 months. Thank you AspireMap!",
        rating: 5,
    },
    Testimonial {
        name: "Neha Gupta",
        role: "Marketing Lead",
        text: "Industry trends feature helped me choose the right specialization.",
        rating: 5,
    },
    Testimonial {
        name: "Vikram Singh",
        role: "Entrepreneur",
        text: "Best career guidance platform I've ever used. Worth every minute!",
        rating: 5,
    },
];

pub const SOCIAL_ICONS: [&str; 4] = ["📘", "🐦", "💼", "📸"];

pub const QUICK_LINKS: [&str; 4] = ["About Us", "Contact", "Privacy Policy", "Terms"];

pub const SOCIAL_PROVIDERS: [SocialProvider; 3] = [
    SocialProvider { icon: "G", label: "Google", class: "social-google" },
    SocialProvider { icon: "f", label: "Facebook", class: "social-facebook" },
    SocialProvider { icon: "in", label: "LinkedIn", class: "social-linkedin" },
];

pub const GUEST_LIMITATIONS: [&str; 3] = [
    "No progress save",
    "Limited assessments",
    "No personalized roadmap",
];

pub const SUBSCRIBE_THANKS: &str = "Thank you for subscribing! ☕";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_avatar_and_stars() {
        let first = TESTIMONIALS[0];
        assert_eq!(first.initial(), 'P');
        assert_eq!(first.stars().chars().count(), 5);

        let generous = Testimonial { rating: 9, ..first };
        assert_eq!(generous.stars().chars().count(), 5);

        let nameless = Testimonial { name: "", ..first };
        assert_eq!(nameless.initial(), '?');
    }

    #[test]
    fn test_steps_are_in_order() {
        let titles: Vec<_> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Take Assessment", "Get Career Report", "Follow Roadmap"]);
    }
}
