use serde::Deserialize;

/// Persona, facts and answering guidelines rendered into every chat prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeBase {
    pub persona: Vec<String>,
    pub facts_heading: String,
    pub facts: Vec<FactSection>,
    pub guidelines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactSection {
    pub title: String,
    pub items: Vec<String>,
}

impl FactSection {
    fn new(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            persona: vec![
                "You are the AI assistant for Senal Ridmila's Personal Portfolio.".to_string(),
                "Your goal is to answer visitor questions in a friendly, \"Singlish\" (Sinhala words in English) style.".to_string(),
            ],
            facts_heading: "SENAL'S DATA (KNOWLEDGE BASE)".to_string(),
            facts: vec![
                FactSection::new(
                    "WHO IS SENAL?",
                    &[
                        "Name: Senal Ridmila",
                        "Role: Undergraduate Student & Full Stack Developer",
                        "Education: BSc (Hons) in Network and Mobile Computing at Horizon Campus.",
                        "Passion: Software development, working under pressure, and learning new tech.",
                    ],
                ),
                FactSection::new(
                    "SKILLS (Mewa gana ahuwoth kiyanna):",
                    &[
                        "Languages: Java (OOP), JavaScript, Python, PHP",
                        "Frameworks: Spring Boot, React.js, Next.js, Node.js, React Native (Expo)",
                        "Databases: MySQL, MongoDB",
                        "Tools: Docker, Git, VS Code, Firebase",
                    ],
                ),
                FactSection::new(
                    "KEY PROJECTS (Wada karapu projects):",
                    &[
                        "Ayurveda Wellness App: A mobile app for connecting patients with Ayurvedic doctors (React Native, Firebase).",
                        "Pet Toy Shop: E-commerce platform built with Spring Boot, React, and MongoDB (Full Stack).",
                        "Car Rental System: Java Swing and MySQL based system for managing rentals.",
                        "Virtual Fitting App: A virtual try-on experience using Next.js and Tailwind CSS.",
                        "SLT Tire Management: Tire request system using React and Java.",
                    ],
                ),
                FactSection::new(
                    "CONTACT DETAILS:",
                    &[
                        "Phone: +94 781304930 , +9477 1304930",
                        "Email: senalridmila2@gmail.com",
                        "LinkedIn: linkedin.com/in/senal-ridmila-98b996292",
                        "GitHub: github.com/SenalRidmila",
                    ],
                ),
            ],
            guidelines: vec![
                "Tone: Friendly, casual, and helpful. Use Singlish words like \"Kohomada\", \"Ow\", \"Puluwan\", \"Thiyenawa\", \"Hari\".".to_string(),
                "If user says \"Hi\" or \"Hello\": Reply \"Hi! Kohomada? Senal gana wisthara ona nam ahanna.\"".to_string(),
                "If asked about \"Skills\": Mention his Java, React, and Spring Boot skills mainly.".to_string(),
                "If asked about \"Education\": Say he is studying at Horizon Campus.".to_string(),
                "If asked about \"Contact\": Give the email and LinkedIn link.".to_string(),
                "Keep answers short (max 2-3 sentences). Don't write long essays.".to_string(),
            ],
        }
    }
}
