//! Static landing page copy.

pub const HERO_TITLE: &str = "Master Every Interview";
pub const HERO_SUBTITLE: &str = "AI-Powered Interview Excellence";
pub const PRODUCT_NAME: &str = "Interview Lens";

pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Computer Vision Analysis",
        body: "Advanced AI tracks your eye contact, posture, and facial expressions to perfect your presentation skills.",
    },
    FeatureCard {
        title: "Real-time Speech Analysis",
        body: "Get instant feedback on your vocal confidence, pacing, and clarity to master professional communication.",
    },
    FeatureCard {
        title: "AI-Powered Coaching",
        body: "Personalized scenarios and adaptive learning that evolves with your interview progress and goals.",
    },
];

pub const PROBLEMS_TITLE: &str = "The Problems";

pub struct ProblemStat {
    pub stat: &'static str,
    pub text: &'static str,
}

pub const PROBLEMS: [ProblemStat; 4] = [
    ProblemStat {
        stat: "75%",
        text: "of qualified candidates fail interviews due to poor presentation skills",
    },
    ProblemStat {
        stat: "68%",
        text: "struggle with maintaining proper eye contact during video interviews",
    },
    ProblemStat {
        stat: "82%",
        text: "report high anxiety and nervousness affecting their performance",
    },
    ProblemStat {
        stat: "71%",
        text: "lack confidence in their speech pace and vocal delivery",
    },
];

pub const SOLUTIONS_TITLE: &str = "How Interview Lens Solves This";

pub struct SolutionCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub points: [&'static str; 2],
}

pub const SOLUTIONS: [SolutionCard; 3] = [
    SolutionCard {
        icon: "📊",
        title: "Real-time Analytics",
        points: [
            "Body language & speech pattern analysis",
            "Eye contact & posture tracking",
        ],
    },
    SolutionCard {
        icon: "🎯",
        title: "Skill Building",
        points: [
            "Perfect your elevator pitch & answers",
            "Company-specific interview scenarios",
        ],
    },
    SolutionCard {
        icon: "💪",
        title: "Confidence Building",
        points: [
            "AI-powered confidence exercises",
            "Vocal clarity & pacing optimization",
        ],
    },
];

pub const WAITLIST_TITLE: &str = "Join the Waitlist";
pub const WAITLIST_BODY: &str = "Be among the first to experience the future of interview preparation. Get exclusive early access when we launch.";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email address";
pub const JOIN_LABEL: &str = "Join Waitlist";
pub const JOINING_LABEL: &str = "Adding...";
pub const MODAL_CLOSE_LABEL: &str = "Awesome!";

pub const DEVELOPER_CREDIT: &str = "Being developed by FrameBros";
pub const RELEASE_DATE: &str = "Releasing August 2026";
