//! Static tables the synthetic roster draws from

use crate::types::Location;

pub const TITLES: &[&str] = &[
    "CEO",
    "CTO",
    "VP Engineering",
    "VP Product",
    "VP Sales",
    "VP Marketing",
    "VP Operations",
    "Director of Engineering",
    "Director of Product",
    "Director of Data",
    "Director of Design",
    "Engineering Manager",
    "Product Manager",
    "Senior Product Manager",
    "Data Science Manager",
    "Principal Engineer",
    "Staff Engineer",
    "Senior Software Engineer",
    "Software Engineer",
    "Junior Software Engineer",
    "Frontend Engineer",
    "Backend Engineer",
    "Full Stack Engineer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Data Scientist",
    "Senior Data Scientist",
    "Data Analyst",
    "UX Designer",
    "UI Designer",
    "Product Designer",
    "UX Researcher",
    "Technical Writer",
    "QA Engineer",
    "Test Engineer",
    "Security Engineer",
    "Sales Manager",
    "Account Executive",
    "Sales Development Rep",
    "Customer Success Manager",
    "Marketing Manager",
    "Content Marketing Manager",
    "Growth Marketing Manager",
    "HR Manager",
    "Recruiter",
    "People Operations Specialist",
    "Finance Manager",
    "Business Analyst",
    "Operations Manager",
    "Support Engineer",
    "Customer Support Specialist",
];

/// Org level 1 with its level 2 divisions
pub const ORG_TREE: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["Engineering", "Data Science", "DevOps", "Security", "QA"],
    ),
    (
        "Product",
        &["Product Management", "Design", "Research", "Analytics"],
    ),
    (
        "Sales",
        &[
            "Enterprise Sales",
            "Mid-Market Sales",
            "Customer Success",
            "Sales Development",
        ],
    ),
    (
        "Marketing",
        &[
            "Growth Marketing",
            "Content Marketing",
            "Brand Marketing",
            "Product Marketing",
        ],
    ),
    (
        "Operations",
        &[
            "Business Operations",
            "People Operations",
            "IT Operations",
            "Legal",
        ],
    ),
    (
        "Finance",
        &[
            "Financial Planning",
            "Accounting",
            "Revenue Operations",
            "Corporate Development",
        ],
    ),
    (
        "HR",
        &[
            "Talent Acquisition",
            "People Development",
            "Compensation",
            "HR Operations",
        ],
    ),
];

/// Level 3 teams keyed by level 2 division
pub const TEAMS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &[
            "Platform Team",
            "Frontend Team",
            "Backend Team",
            "Mobile Team",
            "Infrastructure Team",
        ],
    ),
    (
        "Data Science",
        &[
            "Analytics Team",
            "ML Engineering Team",
            "Data Platform Team",
            "Research Team",
        ],
    ),
    (
        "DevOps",
        &[
            "Cloud Infrastructure",
            "CI/CD Team",
            "Security Operations",
            "Site Reliability",
        ],
    ),
    (
        "Security",
        &[
            "Application Security",
            "Infrastructure Security",
            "Compliance Team",
            "Risk Management",
        ],
    ),
    (
        "QA",
        &[
            "Automation Team",
            "Manual Testing",
            "Performance Testing",
            "Security Testing",
        ],
    ),
    (
        "Product Management",
        &[
            "Core Product",
            "Growth Product",
            "Platform Product",
            "Enterprise Product",
        ],
    ),
    (
        "Design",
        &[
            "Product Design",
            "Brand Design",
            "User Research",
            "Design Systems",
        ],
    ),
    (
        "Research",
        &[
            "User Research",
            "Market Research",
            "Product Research",
            "UX Research",
        ],
    ),
    (
        "Analytics",
        &[
            "Product Analytics",
            "Business Analytics",
            "Data Visualization",
            "Reporting",
        ],
    ),
    (
        "Enterprise Sales",
        &[
            "Large Enterprise",
            "Mid Enterprise",
            "Strategic Accounts",
            "Channel Partners",
        ],
    ),
    (
        "Mid-Market Sales",
        &["SMB Sales", "Growth Sales", "Regional Sales", "Inside Sales"],
    ),
    (
        "Customer Success",
        &[
            "Onboarding",
            "Account Management",
            "Customer Support",
            "Success Operations",
        ],
    ),
    (
        "Sales Development",
        &["Inbound SDR", "Outbound SDR", "Sales Ops", "Lead Generation"],
    ),
];

/// Teams for divisions without their own table
pub const FALLBACK_TEAMS: &[&str] = &["Team A", "Team B", "Team C"];

/// Level 4 squads
pub const SQUADS: &[&str] = &[
    "Alpha Squad",
    "Beta Squad",
    "Gamma Squad",
    "Delta Squad",
    "Core Group",
    "Special Projects",
];

pub const CITIES: &[(&str, &str, &str)] = &[
    ("San Francisco", "CA", "USA"),
    ("New York", "NY", "USA"),
    ("Austin", "TX", "USA"),
    ("Seattle", "WA", "USA"),
    ("Boston", "MA", "USA"),
    ("Chicago", "IL", "USA"),
    ("Los Angeles", "CA", "USA"),
    ("Denver", "CO", "USA"),
    ("London", "England", "UK"),
    ("Berlin", "Berlin", "Germany"),
    ("Toronto", "ON", "Canada"),
    ("Dublin", "Dublin", "Ireland"),
    ("Sydney", "NSW", "Australia"),
    ("Singapore", "Singapore", "Singapore"),
    ("Tel Aviv", "Tel Aviv", "Israel"),
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Sage", "River",
    "Sarah", "Michael", "Emily", "David", "Jessica", "Christopher", "Ashley", "Matthew", "Amanda",
    "Joshua", "Jennifer", "Andrew", "Elizabeth", "Daniel", "Stephanie", "James", "Nicole", "Ryan",
    "Michelle", "John", "Lisa", "Brandon", "Kimberly", "Jason", "Amy", "Justin", "Angela",
    "William", "Heather", "Jonathan", "Priya", "Raj", "Anisha", "Vikram", "Sophia", "Liam", "Emma",
    "Noah", "Olivia", "Chen", "Li", "Wang", "Zhang", "Liu", "Yang", "Huang", "Zhao", "Wu", "Zhou",
    "Mohammed", "Ahmed", "Fatima", "Omar", "Aisha", "Hassan", "Zahra", "Ali", "Amina", "Yusuf",
    "Maria", "Carlos", "Ana", "Luis", "Carmen", "Jose", "Isabel", "Miguel", "Elena", "Diego",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres",
    "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
    "Mitchell", "Carter", "Roberts", "Patel", "Singh", "Kumar", "Sharma", "Gupta", "Verma", "Shah",
    "Joshi", "Reddy", "Agarwal", "Chen", "Wang", "Li", "Zhang", "Liu", "Yang", "Wu", "Huang",
    "Zhou", "Lin", "Al-Ahmed", "Al-Hassan", "Al-Rahman", "Al-Zahra", "Bin-Rashid", "Bin-Omar",
    "El-Mansouri", "Farouk",
];

pub const AI_TOOLS: &[&str] = &[
    "ChatGPT",
    "Claude",
    "GitHub Copilot",
    "Midjourney",
    "Stable Diffusion",
    "Notion AI",
    "Grammarly",
    "Jasper",
];

/// Level 2 divisions of a level 1 org
pub fn divisions_of(org_level_1: &str) -> &'static [&'static str] {
    ORG_TREE
        .iter()
        .find(|(name, _)| *name == org_level_1)
        .map(|(_, divisions)| *divisions)
        .unwrap_or(&[])
}

/// Level 3 teams of a level 2 division
pub fn teams_of(org_level_2: &str) -> &'static [&'static str] {
    TEAMS
        .iter()
        .find(|(name, _)| *name == org_level_2)
        .map(|(_, teams)| *teams)
        .unwrap_or(FALLBACK_TEAMS)
}

/// Level 5 seniority band derived from the title
pub fn seniority_of(title: &str) -> &'static str {
    let has = |needle: &str| title.contains(needle);
    if has("Senior") || has("Staff") || has("Principal") {
        "Senior IC"
    } else if has("Manager") || has("Director") || has("VP") {
        "Leadership"
    } else if has("Junior") || has("Intern") {
        "Junior IC"
    } else {
        "Mid-level IC"
    }
}

pub fn location_at(index: usize) -> Location {
    let (city, state, country) = CITIES[index % CITIES.len()];
    Location::new(city, state, country)
}
