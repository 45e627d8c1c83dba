//! Hand-authored page content.
//!
//! Everything here is `'static` and immutable: the records are compiled into
//! the binary, read by the section components and never mutated.

/// Symbolic icon name, mapped to SVG paths by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Server,
    Database,
    Cloud,
    BarChart,
    Settings,
    Mail,
    Phone,
    Linkedin,
    Github,
    Download,
    ChevronDown,
}

/// Accent colour used for icons, borders and tinted panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Gray,
}

impl Accent {
    /// CSS modifier suffix, e.g. `accent-blue`.
    pub const fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Green => "accent-green",
            Accent::Orange => "accent-orange",
            Accent::Red => "accent-red",
            Accent::Gray => "accent-gray",
        }
    }
}

/// Who the page is about.
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub photo: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// Big number + caption in the about section.
#[derive(Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Expertise card shown next to the biography.
#[derive(Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub accent: Accent,
}

/// One group of skills, keyed by a camel-case identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub glyph: Glyph,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    /// Display title derived from the key, see [`category_title`].
    pub fn title(&self) -> String {
        category_title(self.key)
    }
}

/// One job.
#[derive(Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

/// One project card.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub company: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
}

/// Turn a category key into a heading: a space before every uppercase
/// letter, then the first character uppercased (`"devOps"` -> `"Dev Ops"`).
pub fn category_title(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub const PROFILE: Profile = Profile {
    name: "Meghana Macha",
    first_name: "Meghana",
    headline: "Data Engineer & Analytics Expert",
    summary: "5+ years of experience designing and deploying cloud-native data solutions across automotive, \
              healthcare, and finance verticals. Passionate about building governed, scalable, and \
              maintainable pipelines that power data-driven culture.",
    photo: "assets/meghana-profile.jpg",
    email: "meghana.macha1607@gmail.com",
    phone: "740-814-4042",
};

pub const ABOUT_TAGLINE: &str = "Transforming Data into Insights";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "As a seasoned Data Engineer with over 5 years of experience, I specialize in designing \
     and implementing robust data pipelines that transform raw data into actionable business insights. \
     My expertise spans across cloud platforms, big data technologies, and advanced analytics.",
    "I have successfully delivered data solutions for Fortune 500 companies in automotive, \
     healthcare, and finance sectors, consistently improving data processing efficiency and \
     enabling data-driven decision making at scale.",
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label: "Years Experience",
        accent: Accent::Blue,
    },
    Stat {
        value: "4",
        label: "Companies",
        accent: Accent::Purple,
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Data Engineering",
        description: "Expert in building scalable ETL pipelines, data warehousing, and real-time data processing",
        glyph: Glyph::Database,
        accent: Accent::Blue,
    },
    Highlight {
        title: "Cloud Platforms",
        description: "Proficient in AWS, Azure, and GCP with hands-on experience in cloud-native data solutions",
        glyph: Glyph::Cloud,
        accent: Accent::Purple,
    },
    Highlight {
        title: "Analytics & BI",
        description: "Creating interactive dashboards and reports using Power BI, Tableau, and advanced SQL",
        glyph: Glyph::BarChart,
        accent: Accent::Green,
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        key: "languages",
        glyph: Glyph::Code,
        accent: Accent::Blue,
        skills: &["SQL", "Python (Pandas, NumPy, PySpark)", "Scala", "Shell scripting"],
    },
    SkillCategory {
        key: "etl",
        glyph: Glyph::Server,
        accent: Accent::Green,
        skills: &["Apache Spark", "Airflow", "SSIS", "Informatica", "Kafka"],
    },
    SkillCategory {
        key: "databases",
        glyph: Glyph::Database,
        accent: Accent::Purple,
        skills: &["PostgreSQL/PostGIS", "Snowflake", "Redshift", "Teradata", "BigQuery"],
    },
    SkillCategory {
        key: "cloud",
        glyph: Glyph::Cloud,
        accent: Accent::Orange,
        skills: &["AWS (EMR, Lambda, S3, EKS)", "Azure (Databricks, Synapse)", "GCP"],
    },
    SkillCategory {
        key: "visualization",
        glyph: Glyph::BarChart,
        accent: Accent::Red,
        skills: &["Power BI", "Tableau", "SSRS", "Alteryx", "Excel (Advanced)"],
    },
    SkillCategory {
        key: "devops",
        glyph: Glyph::Settings,
        accent: Accent::Gray,
        skills: &["Docker", "Kubernetes", "Jenkins", "Terraform", "Azure DevOps"],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Tractor Supply Company",
        location: "Tennessee",
        role: "Data Engineer",
        period: "March 2025 – Present",
        achievements: &[
            "Developed scalable ETL pipelines using Azure Data Factory (ADF) and SQL to automate ingestion and transformation of HR and operational datasets",
            "Leveraged Databricks and PySpark for distributed data processing, improving pipeline performance by 40%",
            "Designed cloud-native data workflows using Azure Synapse, streamlining analytics across Retail HR systems",
            "Built and maintained Power BI dashboards tracking headcount, turnover, and hiring metrics for executive stakeholders",
            "Automated recurring HR reports using Python scripts, reducing manual work by 70%",
        ],
    },
    Experience {
        company: "Lithia Motors",
        location: "United States",
        role: "Data Engineer/Power BI Developer",
        period: "January 2023 – February 2025",
        achievements: &[
            "Built robust ETL workflows using Azure Data Factory (ADF) and Apache Airflow to support automotive sales and inventory reporting",
            "Processed and transformed large-scale vehicle and customer datasets using Azure Databricks and Snowflake",
            "Integrated Power BI dashboards with real-time KPIs for dealership performance, inventory levels, and finance metrics",
            "Utilized CI/CD pipelines in Azure DevOps to deploy and monitor data workflows in staging and production",
            "Optimized performance of complex SQL queries in Snowflake and PostgreSQL by indexing and query tuning",
        ],
    },
    Experience {
        company: "Cigna",
        location: "Hyderabad, India",
        role: "Data Analyst",
        period: "July 2021 – July 2022",
        achievements: &[
            "Designed and deployed Tableau dashboards to visualize healthcare claims, member trends, and provider performance",
            "Wrote advanced SQL queries on GCP BigQuery to analyze millions of healthcare transactions",
            "Built automated pipelines using Python and Google Cloud Functions to streamline monthly reporting tasks",
            "Maintained HIPAA-compliant data flows across internal and third-party healthcare platforms",
            "Optimized storage and compute cost in GCP using partitioned tables and cost-based alerts",
        ],
    },
    Experience {
        company: "MetLife",
        location: "Hyderabad, India",
        role: "SQL Developer",
        period: "October 2019 – July 2021",
        achievements: &[
            "Developed and optimized complex SQL queries, stored procedures, and views for insurance policy, claims, and risk reporting",
            "Created SSIS packages to perform ETL operations across policy administration and underwriting systems",
            "Generated operational and regulatory reports using SSRS and delivered scheduled distributions to internal teams",
            "Applied CI/CD practices using version control and deployment strategies to support agile BI development",
            "Improved load times by 30% through infrastructure optimization and SSIS job troubleshooting",
        ],
    },
];

pub const PROJECTS_INTRO: &str = "Here are some of the key data engineering projects I've worked on, showcasing my expertise \
     in building scalable data solutions and driving business value through analytics.";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real-time HR Analytics Pipeline",
        description: "Built scalable ETL pipelines using Azure Data Factory and Databricks for HR data processing, improving performance by 40%",
        tech: &["Azure Data Factory", "Databricks", "PySpark", "Power BI"],
        company: "Tractor Supply Company",
    },
    Project {
        title: "Automotive Sales Data Platform",
        description: "Developed robust ETL workflows for automotive sales and inventory reporting using Azure and Snowflake",
        tech: &["Apache Airflow", "Snowflake", "Azure DevOps", "Power BI"],
        company: "Lithia Motors",
    },
    Project {
        title: "Healthcare Claims Analytics",
        description: "Created HIPAA-compliant data pipelines and Tableau dashboards for healthcare claims analysis",
        tech: &["GCP BigQuery", "Python", "Tableau", "Google Cloud Functions"],
        company: "Cigna",
    },
];

pub const CONTACT_INTRO: &str = "I'm always interested in discussing new opportunities, data engineering challenges, \
     or potential collaborations. Feel free to reach out!";

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Science in Information Technology",
        school: "Webster University, Orlando, FL",
    },
    Education {
        degree: "Bachelor of Computer Science",
        school: "Anurag Group of Institutions, Hyderabad, India",
    },
];

pub const COPYRIGHT: &str = "© 2025 Meghana Macha. Built with Rust and Leptos.";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_titles_follow_key_casing() {
        assert_eq!(category_title("languages"), "Languages");
        assert_eq!(category_title("etl"), "Etl");
        assert_eq!(category_title("devops"), "Devops");
        assert_eq!(category_title("devOps"), "Dev Ops");
        assert_eq!(category_title(""), "");
    }

    #[test]
    fn skill_titles_in_page_order() {
        let titles: Vec<String> = SKILLS.iter().map(SkillCategory::title).collect();
        assert_eq!(
            titles,
            ["Languages", "Etl", "Databases", "Cloud", "Visualization", "Devops"]
        );
    }

    #[test]
    fn every_job_lists_five_achievements() {
        assert_eq!(EXPERIENCES.len(), 4);
        for job in EXPERIENCES {
            assert_eq!(job.achievements.len(), 5, "{}", job.company);
        }
    }

    #[test]
    fn company_stat_matches_work_history() {
        let companies = STATS
            .iter()
            .find(|s| s.label == "Companies")
            .expect("companies stat");
        assert_eq!(companies.value, EXPERIENCES.len().to_string());
    }

    #[test]
    fn projects_reference_known_employers() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(
                EXPERIENCES.iter().any(|e| e.company == project.company),
                "{} has no matching job",
                project.title
            );
            assert_eq!(project.tech.len(), 4);
        }
    }

    #[test]
    fn contact_details_verbatim() {
        assert_eq!(PROFILE.email, "meghana.macha1607@gmail.com");
        assert_eq!(PROFILE.phone, "740-814-4042");
        assert_eq!(EXPERIENCES[0].period, "March 2025 – Present");
        assert_eq!(EDUCATION.len(), 2);
    }

    #[test]
    fn summaries_keep_single_spaces() {
        for text in [PROFILE.summary, PROJECTS_INTRO, CONTACT_INTRO]
            .into_iter()
            .chain(ABOUT_PARAGRAPHS.iter().copied())
        {
            assert!(!text.contains("  "), "double space in: {text}");
        }
    }
}
