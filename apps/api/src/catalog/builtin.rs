//! Keyword table for the reference deployment.

pub(crate) const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    (
        "frontend",
        &[
            "html",
            "css",
            "javascript",
            "react",
            "typescript",
            "git",
            "redux",
            "webpack",
            "responsive design",
            "sass",
            "accessibility",
            "api",
            "json",
            "debugging",
            "dom manipulation",
            "bootstrap",
            "tailwind",
        ],
    ),
    (
        "backend",
        &[
            "python",
            "java",
            "nodejs",
            "sql",
            "postgresql",
            "mongodb",
            "docker",
            "aws",
            "api",
            "rest",
            "graphql",
            "authentication",
            "redis",
            "linux",
            "git",
            "ci/cd",
            "microservices",
            "testing",
        ],
    ),
    (
        "fullstack",
        &[
            "javascript",
            "react",
            "nodejs",
            "html",
            "css",
            "sql",
            "database",
            "api",
            "git",
            "deployment",
            "aws",
            "docker",
            "frontend",
            "backend",
            "typescript",
            "orm",
            "mvc",
        ],
    ),
    (
        "data-scientist",
        &[
            "python",
            "sql",
            "machine learning",
            "pandas",
            "numpy",
            "statistics",
            "data visualization",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "jupyter",
            "tableau",
            "aws",
            "etl",
            "big data",
        ],
    ),
    (
        "product-manager",
        &[
            "roadmap",
            "agile",
            "scrum",
            "user stories",
            "stakeholder management",
            "analytics",
            "jira",
            "product lifecycle",
            "strategy",
            "market research",
            "requirements",
            "collaboration",
            "prioritization",
            "ux",
        ],
    ),
];
