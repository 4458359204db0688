//! Built-in skill catalog: canonical skill ids with their surface forms, and the
//! category table used for synergy scoring and transferable-skill suggestions.
//!
//! Pure data. `SkillDictionary::builtin()` lower-cases and de-duplicates these lists,
//! so entries here only need to be readable.

pub(super) const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    // Programming languages and core stacks
    (
        "javascript",
        &[
            "javascript", "js", "ecmascript", "es6", "es2015", "es2020", "node.js", "nodejs",
            "javascript developer", "javscript",
        ],
    ),
    ("typescript", &["typescript", "ts", "typescript developer", "ts programming"]),
    (
        "python",
        &[
            "python", "py", "python3", "python programming", "python developer",
            "python scripting", "django", "flask", "fastapi",
        ],
    ),
    ("java", &["java", "java programming", "java developer", "spring", "spring boot", "hibernate"]),
    ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet", "asp.net", "asp.net core"]),
    ("cpp", &["c++", "cplusplus", "c plus plus"]),
    ("go", &["go", "golang", "go programming", "golang developer"]),
    ("rust", &["rust", "rust programming", "rust developer"]),
    ("php", &["php", "php programming", "php developer", "laravel", "symfony", "wordpress"]),
    ("ruby", &["ruby", "ruby programming", "ruby developer", "rails", "ruby on rails", "ror"]),
    (
        "swift",
        &[
            "swift", "swift programming", "ios swift", "swift developer", "objective-c",
            "objective c", "objc",
        ],
    ),
    ("kotlin", &["kotlin", "kotlin programming", "kotlin developer", "android kotlin"]),
    ("r", &["r", "r programming", "r developer", "r statistical"]),
    ("matlab", &["matlab", "matlab programming", "matlab scripting"]),
    ("perl", &["perl", "perl scripting"]),

    // Frontend frameworks & tooling
    (
        "react",
        &[
            "react", "reactjs", "react.js", "react developer", "react native", "next.js", "nextjs",
        ],
    ),
    ("redux", &["redux", "reduxjs", "state management", "react redux"]),
    ("angular", &["angular", "angularjs", "angular.js"]),
    ("vue", &["vue", "vuejs", "vue.js", "nuxt.js", "nuxt"]),
    ("svelte", &["svelte", "sveltejs"]),
    ("webpack", &["webpack", "module bundler", "webpack config"]),
    ("babel", &["babel", "babel transpiler", "babeljs"]),
    ("esbuild", &["esbuild", "esbuild bundler"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3", "sass", "scss", "less", "tailwind", "tailwind css", "bootstrap"]),

    // Backend frameworks & platforms
    ("nodejs", &["node", "nodejs", "node.js", "express", "expressjs", "express.js"]),
    ("django", &["django", "django python", "django framework"]),
    ("flask", &["flask", "flask python", "flask microframework"]),
    ("spring", &["spring", "spring boot", "springboot", "spring framework"]),
    ("dotnet", &[".net", "dotnet", "asp.net", "aspnet", "asp.net core"]),
    ("laravel", &["laravel", "laravel php", "laravel framework"]),
    ("rails", &["rails", "ruby on rails", "ror", "rails developer"]),

    // Databases & storage
    ("mysql", &["mysql", "my sql", "mysql database"]),
    ("postgresql", &["postgresql", "postgres", "postgres sql", "pg"]),
    ("sqlserver", &["microsoft sql server", "mssql", "sql server", "tsql", "t-sql"]),
    ("oracle_db", &["oracle", "oracle database", "oracle db"]),
    ("mongodb", &["mongodb", "mongo db", "mongo database", "nosql"]),
    ("cassandra", &["cassandra", "apache cassandra"]),
    ("redis", &["redis", "redis cache", "in-memory datastore", "key-value store"]),
    ("elasticsearch", &["elasticsearch", "elastic search", "elastic", "elk", "opensearch"]),
    ("neo4j", &["neo4j", "graph database", "graph db"]),
    ("dynamodb", &["dynamodb", "amazon dynamodb", "aws dynamodb"]),
    ("sql", &["sql", "structured query language", "sql querying"]),

    // Data engineering & analytics
    ("bigquery", &["bigquery", "google bigquery", "gcp bigquery"]),
    ("hive", &["hive", "apache hive"]),
    ("airflow", &["airflow", "apache airflow", "airflow dag", "workflow orchestration"]),
    ("kafka", &["kafka", "apache kafka", "kafka streaming"]),
    (
        "spark",
        &[
            "spark", "apache spark", "pyspark", "spark sql", "spark streaming",
            "structured streaming",
        ],
    ),
    (
        "tableau",
        &[
            "tableau", "tableau desktop", "tableau server", "data visualization",
            "dashboard creation",
        ],
    ),
    ("power_bi", &["power bi", "microsoft power bi", "pbix"]),
    (
        "excel",
        &[
            "microsoft excel", "excel", "ms excel", "spreadsheets", "xls", "xlsx", "pivot tables",
            "vlookup", "xlookup", "macros", "vba",
        ],
    ),

    // ML & AI
    (
        "machine_learning",
        &[
            "machine learning", "ml", "ml engineer", "ml models", "artificial intelligence", "ai",
        ],
    ),
    ("deep_learning", &["deep learning", "neural networks", "dl"]),
    ("tensorflow", &["tensorflow", "tf", "keras", "tensorflow keras"]),
    ("pytorch", &["pytorch", "torch", "pytorch lightning"]),
    ("scikit_learn", &["scikit-learn", "sklearn", "scikit learn"]),
    ("nlp", &["nlp", "natural language processing", "text mining", "nlp engineer"]),
    ("computer_vision", &["computer vision", "cv", "image processing"]),
    ("data_science", &["data science", "data scientist", "data analysis"]),
    ("feature_engineering", &["feature engineering", "feature selection"]),

    // Cloud & DevOps
    (
        "aws",
        &[
            "aws", "amazon web services", "ec2", "s3", "lambda", "rds", "cloudformation",
            "cloudfront",
        ],
    ),
    ("azure", &["azure", "microsoft azure", "azure functions"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform", "gcp cloud functions"]),
    (
        "docker",
        &[
            "docker", "docker containers", "containerization", "docker compose", "dockerized",
        ],
    ),
    ("kubernetes", &["kubernetes", "k8s", "helm", "helm charts", "cluster"]),
    ("terraform", &["terraform", "infrastructure as code", "iac"]),
    ("ansible", &["ansible", "ansible automation"]),
    (
        "jenkins",
        &[
            "jenkins", "jenkins pipeline", "ci/cd", "continuous integration",
            "continuous deployment",
        ],
    ),
    ("github_actions", &["github actions", "actions", "gha"]),
    ("gitlab_ci", &["gitlab ci", "gitlab pipelines"]),
    ("circleci", &["circleci", "circle ci"]),
    ("prometheus", &["prometheus", "monitoring prometheus"]),
    ("grafana", &["grafana", "grafana dashboards"]),
    ("datadog", &["datadog", "datadog monitoring"]),
    ("splunk", &["splunk", "splunk logging", "splunk es"]),
    ("new_relic", &["new relic", "newrelic", "application monitoring"]),

    // APIs & architecture
    ("rest_api", &["rest", "rest api", "restful", "restful api"]),
    ("graphql", &["graphql", "graphql api"]),
    ("grpc", &["grpc", "g rpc", "remote procedure calls"]),
    (
        "microservices",
        &[
            "microservices", "microservices architecture", "service oriented architecture", "soa",
        ],
    ),
    (
        "serverless",
        &[
            "serverless", "serverless architecture", "aws lambda", "azure functions",
            "gcp cloud functions",
        ],
    ),
    ("event_driven_architecture", &["event-driven", "event driven architecture", "eda"]),

    // Security & testing
    ("application_security", &["application security", "appsec", "secure coding", "owasp"]),
    ("penetration_testing", &["penetration testing", "pen testing", "ethical hacking"]),
    ("siem", &["siem", "security information and event management"]),
    ("unit_testing", &["unit testing", "unit tests", "test driven development", "tdd"]),
    ("integration_testing", &["integration testing", "integration tests"]),
    ("selenium", &["selenium", "selenium webdriver"]),
    ("cypress", &["cypress", "cypress.io", "end-to-end testing"]),
    ("pytest", &["pytest", "python testing", "py.test"]),
    ("junit", &["junit", "java unit testing"]),

    // Mobile & desktop
    (
        "android",
        &[
            "android", "android sdk", "android developer", "android studio", "kotlin", "java",
        ],
    ),
    ("ios", &["ios", "ios developer", "xcode", "swift", "objective-c"]),
    ("react_native", &["react native", "react-native", "mobile react"]),
    ("flutter", &["flutter", "dart", "flutter mobile"]),
    ("electron", &["electron", "desktop apps", "electron js"]),

    // Business & soft skills
    (
        "project_management",
        &[
            "project management", "pmp", "project planning", "project coordination", "agile",
            "scrum", "kanban", "waterfall",
        ],
    ),
    (
        "leadership",
        &[
            "leadership", "team leadership", "team lead", "people management", "mentoring",
            "coaching",
        ],
    ),
    (
        "communication",
        &[
            "communication", "communication skills", "verbal communication",
            "written communication", "presentation skills", "public speaking",
        ],
    ),
    (
        "problem_solving",
        &[
            "problem solving", "critical thinking", "analytical thinking", "troubleshooting",
        ],
    ),
    ("time_management", &["time management", "prioritization", "task management"]),
    ("negotiation", &["negotiation", "deal closing", "negotiation skills"]),
    ("stakeholder_management", &["stakeholder management", "stakeholder engagement"]),
    (
        "business_analysis",
        &[
            "business analysis", "ba", "business analyst", "requirements gathering",
        ],
    ),

    // Sales & marketing
    ("seo", &["seo", "search engine optimization", "organic search"]),
    ("sem", &["sem", "search engine marketing", "paid search", "ppc"]),
    ("google_ads", &["google ads", "adwords", "adwords campaigns"]),
    ("facebook_ads", &["facebook ads", "meta ads", "social ads"]),
    ("content_marketing", &["content marketing", "content strategy", "content creation"]),
    ("copywriting", &["copywriting", "copy writer", "ad copy", "content copy"]),
    ("email_marketing", &["email marketing", "email campaigns", "mailchimp", "sendgrid"]),
    ("social_media", &["social media", "social media management", "smm", "community management"]),
    ("marketing_automation", &["inbound marketing", "lead nurturing", "marketing automation"]),
    (
        "marketing_analytics",
        &[
            "marketing analytics", "campaign analytics", "ga4", "google analytics",
        ],
    ),
    ("crm", &["crm", "customer relationship management", "hubspot", "salesforce"]),
    ("lead_generation", &["lead generation", "lead gen", "prospecting"]),
    ("account_management", &["account management", "client management", "customer success"]),
    ("business_development", &["business development", "bd", "bizdev"]),
    ("retention", &["customer retention", "churn reduction", "loyalty programs"]),
    ("affiliate_marketing", &["affiliate marketing", "partner marketing"]),
    ("ecommerce_marketing", &["ecommerce marketing", "shopify marketing", "marketplace marketing"]),

    // Finance & accounting
    (
        "accounting",
        &[
            "accounting", "bookkeeping", "financial accounting", "general ledger", "gl accounting",
        ],
    ),
    ("financial_reporting", &["financial reporting", "ifrs reporting", "gaap reporting"]),
    ("audit", &["audit", "external audit", "internal audit", "auditor"]),
    ("budgeting_forecasting", &["budgeting", "forecasting", "financial planning", "fp&a"]),
    (
        "financial_modeling",
        &[
            "financial modeling", "financial modelling", "excel financial models",
        ],
    ),
    ("treasury", &["treasury", "cash management", "liquidity management"]),
    ("investment_analysis", &["investment analysis", "portfolio management", "asset management"]),
    ("risk_management", &["risk management", "enterprise risk", "credit risk", "market risk"]),
    ("quickbooks", &["quickbooks", "intuit quickbooks", "qb"]),
    ("sap_financials", &["sap fi", "sap financials", "sap erp financial module"]),
    ("oracle_financials", &["oracle financials", "oracle ebs financials", "oracle erp"]),
    ("accounts_payable", &["accounts payable", "ap", "invoice processing"]),
    ("accounts_receivable", &["accounts receivable", "ar", "billing collections"]),
    ("credit_analysis", &["credit analysis", "credit underwriting"]),
    (
        "finance_compliance",
        &[
            "financial compliance", "regulatory compliance", "finra", "sec compliance",
        ],
    ),

    // Healthcare
    ("nursing", &["rn", "registered nurse", "licensed nurse", "nursing"]),
    ("lpn", &["lpn", "licensed practical nurse", "licensed vocational nurse", "lpn lvn"]),
    ("cna", &["cna", "certified nursing assistant", "nursing aide"]),
    ("emt", &["emt", "emt-basic", "emergency medical technician"]),
    ("paramedic", &["paramedic", "advanced life support", "als"]),
    ("cpr_bls", &["cpr", "bls", "basic life support"]),
    ("acls", &["acls", "advanced cardiac life support"]),
    ("pals", &["pals", "pediatric advanced life support"]),
    ("phlebotomy", &["phlebotomy", "blood draw", "phlebotomist"]),
    ("iv_therapy", &["iv therapy", "intravenous therapy", "iv insertion"]),
    ("wound_care", &["wound care", "wound management", "dressing changes"]),
    ("infection_control", &["infection control", "aseptic technique", "infection prevention"]),
    ("medication_admin", &["medication administration", "med admin", "drug administration"]),
    ("ekg_ecg", &["ekg", "ecg", "electrocardiogram"]),
    ("radiography", &["xray", "radiography", "radiologic technician"]),
    ("mri", &["mri", "magnetic resonance imaging", "mri tech"]),
    ("ct_scan", &["ct scan", "computed tomography", "ct tech"]),
    ("ultrasound", &["ultrasound", "sonography", "ultrasound tech", "sono"]),
    (
        "ehr",
        &[
            "ehr", "emr", "electronic health records", "health information management", "epic",
            "cerner", "eclinicalworks",
        ],
    ),
    ("medical_coding", &["medical coding", "cpt", "icd-10", "coding specialist"]),
    ("medical_billing", &["medical billing", "billing and coding", "medical claims"]),
    (
        "clinical_research",
        &[
            "clinical research", "clinical trials", "gcp", "good clinical practice",
        ],
    ),
    ("healthcare_quality", &["quality in healthcare", "patient safety", "clinical governance"]),
    ("telemedicine", &["telemedicine", "telehealth", "telecare"]),

    // Manufacturing, construction, operations
    ("lean_manufacturing", &["lean manufacturing", "lean", "kaizen", "continuous improvement"]),
    ("six_sigma", &["six sigma", "6σ", "sixsigma", "lean six sigma", "black belt", "green belt"]),
    ("quality_assurance", &["quality assurance", "qa", "quality control", "qc"]),
    ("root_cause_analysis", &["root cause analysis", "rca", "fishbone", "5 why", "five why"]),
    ("sop", &["sop", "standard operating procedures", "process documentation"]),
    ("cnc", &["cnc", "cnc machining", "cnc operator"]),
    ("cad_cam", &["cad", "cam", "computer aided design", "autocad", "solidworks"]),
    (
        "plc_programming",
        &[
            "plc programming", "programmable logic controller", "siemens s7", "allen bradley",
        ],
    ),
    ("welding", &["welding", "mig welding", "tig welding", "weld operator"]),
    ("osha", &["osha", "occupational safety and health", "safety compliance", "workplace safety"]),
    (
        "construction_management",
        &[
            "construction management", "site management", "project superintendent",
        ],
    ),
    (
        "equipment_operation",
        &[
            "heavy equipment operation", "excavator", "bulldozer", "forklift operator",
        ],
    ),
    ("estimating", &["construction estimating", "cost estimating", "quantity surveying"]),
    ("blueprint_reading", &["blueprint reading", "reading plans", "construction drawings"]),

    // Retail & hospitality
    (
        "customer_service",
        &[
            "customer service", "customer support", "client relations", "customer care",
            "help desk",
        ],
    ),
    ("pos", &["pos", "point of sale", "pos systems", "register"]),
    (
        "inventory_management",
        &[
            "inventory management", "stock control", "merchandise control", "warehouse management",
        ],
    ),
    ("visual_merchandising", &["visual merchandising", "merchandising", "store displays"]),
    ("loss_prevention", &["loss prevention", "shrinkage control", "asset protection"]),
    ("hotel_operations", &["hotel operations", "hotel management", "front desk", "concierge"]),
    ("food_safety", &["food safety", "hazard analysis", "haccp", "servsafe"]),
    ("event_planning", &["event planning", "event management", "banquet operations"]),
    ("reservations", &["reservations", "booking systems", "opera pms", "rezdy"]),
    ("guest_relations", &["guest relations", "guest services", "customer hospitality"]),

    // HR & legal
    ("recruiting", &["recruiting", "talent acquisition", "sourcing", "headhunting"]),
    ("onboarding", &["onboarding", "new hire orientation", "employee onboarding"]),
    ("payroll", &["payroll", "payroll processing", "adp", "payroll software"]),
    ("benefits_admin", &["benefits administration", "employee benefits", "health insurance admin"]),
    ("employee_relations", &["employee relations", "er", "workplace relations"]),
    ("hr_compliance", &["hr compliance", "labor law compliance", "employment law"]),
    ("performance_management", &["performance management", "performance reviews", "pdps"]),
    ("employment_law", &["employment law", "labor law", "workplace law"]),
    ("litigation_support", &["litigation support", "legal support", "paralegal"]),
    ("legal_research", &["legal research", "lexisnexis", "westlaw"]),

    // Tools, productivity, certifications
    ("jira", &["jira", "jira software", "atlassian jira", "issue tracking"]),
    ("confluence", &["confluence", "atlassian confluence", "wiki"]),
    ("asana", &["asana", "asana project management"]),
    ("trello", &["trello", "kanban board", "trello boards"]),
    ("slack", &["slack", "slack messaging"]),
    ("microsoft_teams", &["microsoft teams", "teams", "ms teams"]),
    ("zoom", &["zoom", "zoom meetings", "video conferencing"]),
    ("google_workspace", &["google workspace", "g suite", "gsuite", "gmail", "google drive"]),
    (
        "microsoft_office",
        &[
            "microsoft office", "office 365", "ms office", "word", "powerpoint", "excel",
        ],
    ),
    ("pmp", &["pmp", "project management professional", "project management certification"]),
    ("scrum_master", &["scrum master", "csm", "scrum master certification"]),
    ("prince2", &["prince2", "prince 2", "prince2 practitioner"]),
    ("safe_agile", &["safe", "scaled agile", "safe agile", "scaling agile"]),
    ("itil", &["itil", "it service management", "itil framework"]),
    ("security_plus", &["security+", "comptia security+", "comptia security plus"]),
    ("aws_solutions_architect", &["aws certified solutions architect", "aws architect", "aws sa"]),
    (
        "azure_administrator",
        &[
            "microsoft azure administrator", "azure admin", "azure administrator",
        ],
    ),
    (
        "gcp_architect",
        &[
            "google cloud professional cloud architect", "gcp architect", "google cloud architect",
        ],
    ),
    ("cisco_networking", &["cisco", "cisco networking", "ccna", "network engineer"]),
    ("tcp_ip", &["tcp/ip", "networking", "routing", "switching"]),
    ("voip", &["voip", "voice over ip", "sip", "pbx"]),
    ("ux_design", &["ux", "user experience", "ux design", "user research"]),
    ("ui_design", &["ui", "user interface", "ui design", "visual design"]),
    ("graphic_design", &["graphic design", "adobe photoshop", "adobe illustrator", "indesign"]),
    ("photoshop", &["photoshop", "adobe photoshop", "ps"]),
    ("illustrator", &["illustrator", "adobe illustrator"]),
    ("indesign", &["indesign", "adobe indesign"]),
    ("figma", &["figma", "figma design", "ui prototyping"]),
    ("sketch", &["sketch", "sketch app"]),
    ("invision", &["invision", "invision prototyping"]),
];

/// Category → canonical skills. Each skill is listed under at most one category;
/// the dictionary keeps the first category it sees for a skill.
pub(super) const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "javascript", "typescript", "python", "java", "csharp", "cpp", "go", "rust", "php",
            "ruby", "swift", "kotlin", "r", "matlab", "perl",
        ],
    ),
    (
        "frontend",
        &[
            "react", "redux", "angular", "vue", "svelte", "webpack", "babel", "esbuild", "html",
            "css",
        ],
    ),
    ("backend", &["nodejs", "django", "flask", "spring", "dotnet", "laravel", "rails"]),
    (
        "database",
        &[
            "mysql", "postgresql", "sqlserver", "oracle_db", "mongodb", "cassandra", "redis",
            "elasticsearch", "neo4j", "dynamodb", "sql",
        ],
    ),
    (
        "data_engineering",
        &["bigquery", "hive", "airflow", "kafka", "spark", "tableau", "power_bi", "excel"],
    ),
    (
        "machine_learning",
        &[
            "machine_learning", "deep_learning", "tensorflow", "pytorch", "scikit_learn", "nlp",
            "computer_vision", "data_science", "feature_engineering",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
            "github_actions", "gitlab_ci", "circleci", "prometheus", "grafana", "datadog",
            "splunk", "new_relic", "aws_solutions_architect", "azure_administrator",
            "gcp_architect",
        ],
    ),
    (
        "architecture",
        &["rest_api", "graphql", "grpc", "microservices", "serverless", "event_driven_architecture"],
    ),
    ("security", &["application_security", "penetration_testing", "siem", "security_plus"]),
    (
        "testing",
        &["unit_testing", "integration_testing", "selenium", "cypress", "pytest", "junit"],
    ),
    ("mobile", &["android", "ios", "react_native", "flutter", "electron"]),
    (
        "soft_skills",
        &[
            "leadership", "communication", "problem_solving", "time_management", "negotiation",
            "stakeholder_management",
        ],
    ),
    (
        "project_management",
        &[
            "project_management", "business_analysis", "pmp", "scrum_master", "prince2",
            "safe_agile", "itil",
        ],
    ),
    (
        "marketing",
        &[
            "seo", "sem", "google_ads", "facebook_ads", "content_marketing", "copywriting",
            "email_marketing", "social_media", "marketing_automation", "marketing_analytics",
            "affiliate_marketing", "ecommerce_marketing",
        ],
    ),
    (
        "sales",
        &["crm", "lead_generation", "account_management", "business_development", "retention"],
    ),
    (
        "finance",
        &[
            "accounting", "financial_reporting", "audit", "budgeting_forecasting",
            "financial_modeling", "treasury", "investment_analysis", "risk_management",
            "quickbooks", "sap_financials", "oracle_financials", "accounts_payable",
            "accounts_receivable", "credit_analysis", "finance_compliance",
        ],
    ),
    (
        "healthcare",
        &[
            "nursing", "lpn", "cna", "emt", "paramedic", "cpr_bls", "acls", "pals", "phlebotomy",
            "iv_therapy", "wound_care", "infection_control", "medication_admin", "ekg_ecg",
            "radiography", "mri", "ct_scan", "ultrasound", "ehr", "medical_coding",
            "medical_billing", "clinical_research", "healthcare_quality", "telemedicine",
        ],
    ),
    (
        "manufacturing",
        &[
            "lean_manufacturing", "six_sigma", "quality_assurance", "root_cause_analysis", "sop",
            "cnc", "cad_cam", "plc_programming", "welding", "osha", "construction_management",
            "equipment_operation", "estimating", "blueprint_reading",
        ],
    ),
    (
        "hospitality",
        &[
            "customer_service", "pos", "inventory_management", "visual_merchandising",
            "loss_prevention", "hotel_operations", "food_safety", "event_planning",
            "reservations", "guest_relations",
        ],
    ),
    (
        "human_resources",
        &[
            "recruiting", "onboarding", "payroll", "benefits_admin", "employee_relations",
            "hr_compliance", "performance_management",
        ],
    ),
    ("legal", &["employment_law", "litigation_support", "legal_research"]),
    (
        "collaboration_tools",
        &[
            "jira", "confluence", "asana", "trello", "slack", "microsoft_teams", "zoom",
            "google_workspace", "microsoft_office",
        ],
    ),
    ("networking", &["cisco_networking", "tcp_ip", "voip"]),
    (
        "design",
        &[
            "ux_design", "ui_design", "graphic_design", "photoshop", "illustrator", "indesign",
            "figma", "sketch", "invision",
        ],
    ),
];
