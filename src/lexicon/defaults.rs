//! Built-in vocabulary

/// Default technical skills database
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming Languages
    "java", "python", "javascript", "typescript", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "go", "rust", "scala", "r", "matlab", "sql", "nosql", "pl/sql",

    // Web Technologies
    "react", "angular", "vue", "svelte", "next.js", "nuxt", "gatsby",
    "node.js", "express", "django", "flask", "spring", "spring boot", "hibernate",
    "asp.net", ".net", "laravel", "ruby on rails", "fastapi",
    "html", "html5", "css", "css3", "sass", "less", "tailwind", "bootstrap", "material-ui",

    // Databases
    "mysql", "postgresql", "mongodb", "redis", "cassandra", "oracle", "sql server",
    "dynamodb", "firebase", "supabase",

    // Infrastructure
    "docker", "kubernetes", "jenkins", "gitlab ci", "github actions", "travis ci",
    "terraform", "ansible", "puppet", "chef",
    "aws", "azure", "gcp", "heroku", "vercel", "netlify", "digital ocean",
    "git", "svn", "mercurial", "github", "gitlab", "bitbucket",
    "rest", "graphql", "grpc", "soap", "api", "microservices", "monolith",

    // Process and tooling
    "agile", "scrum", "kanban", "jira", "confluence",

    // Testing
    "junit", "jest", "mocha", "pytest", "selenium", "cypress", "testng",

    // Data Science/ML
    "machine learning", "deep learning", "ai", "neural networks", "tensorflow", "pytorch", "keras",
    "data science", "pandas", "numpy", "scikit-learn", "matplotlib",
    "blockchain", "ethereum", "solidity", "web3",

    // Operations
    "devops", "ci/cd", "linux", "unix", "bash", "powershell",
    "apache", "nginx", "tomcat", "iis",
    "elasticsearch", "kafka", "rabbitmq",
    "oauth", "jwt", "saml", "sso",

    // Frontend tooling
    "webpack", "vite", "rollup", "babel",
    "redux", "mobx", "vuex", "context api",
    "responsive design", "mobile-first", "progressive web app", "pwa",
];

/// Default soft skills database
pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "collaboration", "problem solving",
    "analytical thinking", "critical thinking", "decision making", "time management",
    "project management", "people management", "stakeholder management",
    "presentation", "public speaking", "negotiation", "conflict resolution",
    "creativity", "innovation", "adaptability", "flexibility", "resilience",
    "attention to detail", "organization", "multitasking", "prioritization",
    "customer service", "client relations", "interpersonal skills",
    "mentoring", "coaching", "training", "strategic thinking", "planning",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "created", "implemented", "designed",
    "led", "supervised", "coordinated", "executed", "delivered", "optimized",
    "spearheaded", "enhanced", "streamlined", "monitored", "architected",
    "built", "analyzed", "reduced", "improved", "launched", "established",
    "initiated", "increased", "decreased", "generated", "resolved", "transformed",
    "automated", "collaborated", "facilitated", "negotiated", "presented",
    "trained", "mentored", "authored", "published", "engineered", "integrated",
    "migrated", "scaled", "secured", "tested", "debugged", "deployed",
    "maintained", "documented", "researched", "evaluated", "assessed",
];

pub const SECTION_HEADERS: &[&str] = &[
    "professional summary", "summary", "profile", "objective", "career objective",
    "skills", "technical skills", "core competencies", "expertise", "proficiencies",
    "experience", "work experience", "professional experience", "work history", "employment",
    "projects", "portfolio", "key projects", "notable projects",
    "education", "academic background", "qualifications", "academic qualifications",
    "certifications", "certificates", "licenses", "professional development",
    "awards", "honors", "achievements", "accomplishments",
    "volunteering", "volunteer experience", "community involvement",
    "publications", "research", "papers",
    "references", "contact", "contact information",
];

/// Skills that earn an extra bonus on top of the base skills score
pub const MODERN_SKILLS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "react",
    "node.js", "python", "machine learning", "devops", "microservices",
];

/// Terms parsers are commonly assumed to look for
pub const ATS_KEYWORDS: &[&str] = &[
    "experience", "education", "skills", "work", "project",
    "bachelor", "master", "university", "degree", "certification",
];

/// Fragments that mark a section header as a dedicated skills section
pub const SKILLS_HEADER_MARKERS: &[&str] = &["skill", "competenc", "expertise"];
