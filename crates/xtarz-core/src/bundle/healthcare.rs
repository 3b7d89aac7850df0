//! Healthcare-focused content.

use super::model::{AnalysisBundle, Prediction, Technology, TitledItem};

pub static HEALTHCARE: AnalysisBundle = AnalysisBundle {
    executive_summary: "The {topic} field represents a critical component of healthcare delivery with significant potential for improving patient outcomes, operational efficiency, and healthcare accessibility. Our analysis reveals key opportunities for innovation, quality improvement, and sustainable healthcare solutions.",
    insights: &[
        "Technology integration in {topic} is improving patient care and outcomes",
        "Regulatory compliance and quality standards are driving innovation in {topic}",
        "Patient-centered care models are reshaping {topic} service delivery",
        "Data analytics and AI are enhancing {topic} decision-making and treatment protocols",
        "Telehealth and remote monitoring are expanding {topic} accessibility",
    ],
    market_analysis: "The {topic} market is experiencing significant growth driven by aging populations, increasing healthcare needs, and technological advancement. Market research indicates strong demand for innovative {topic} solutions that improve patient outcomes and operational efficiency.",
    trends: &[
        TitledItem {
            title: "Precision Medicine",
            description: "Personalized treatment approaches based on individual patient characteristics and genetics",
        },
        TitledItem {
            title: "Digital Health Integration",
            description: "Seamless integration of digital tools and platforms in healthcare delivery",
        },
        TitledItem {
            title: "Value-Based Care",
            description: "Focus on patient outcomes and cost-effectiveness in healthcare delivery",
        },
        TitledItem {
            title: "Preventive Care Models",
            description: "Emphasis on prevention and early intervention to improve health outcomes",
        },
    ],
    technology_analysis: "Healthcare technology adoption in {topic} is accelerating, with institutions investing in electronic health records, telemedicine platforms, and AI-powered diagnostic tools. The integration of advanced technologies is transforming patient care delivery and clinical decision-making.",
    technologies: &[
        Technology {
            name: "Electronic Health Records",
            description: "Comprehensive digital patient records for improved care coordination",
        },
        Technology {
            name: "Telemedicine Platforms",
            description: "Remote healthcare delivery and patient monitoring systems",
        },
        Technology {
            name: "AI Diagnostic Tools",
            description: "Machine learning algorithms for enhanced diagnostic accuracy",
        },
        Technology {
            name: "Wearable Health Devices",
            description: "Continuous patient monitoring and health tracking technologies",
        },
    ],
    opportunities: &[
        "Expanding {topic} services to underserved populations and rural areas",
        "Developing innovative {topic} solutions for chronic disease management",
        "Creating integrated care models that improve patient outcomes",
        "Leveraging technology to enhance {topic} accessibility and affordability",
        "Building partnerships to strengthen {topic} ecosystem and capabilities",
    ],
    challenges: &[
        "Managing regulatory compliance and quality assurance requirements",
        "Ensuring patient data security and privacy protection",
        "Addressing healthcare disparities and access barriers",
        "Balancing technology adoption with human-centered care",
        "Managing costs while maintaining quality and accessibility",
    ],
    immediate_actions: &[
        TitledItem {
            title: "Quality Assessment",
            description: "Conduct comprehensive evaluation of {topic} service quality and patient outcomes",
        },
        TitledItem {
            title: "Technology Integration",
            description: "Implement digital health tools to enhance {topic} delivery",
        },
        TitledItem {
            title: "Staff Training",
            description: "Invest in healthcare professional development and technology training",
        },
        TitledItem {
            title: "Patient Engagement",
            description: "Develop strategies to improve patient participation and satisfaction",
        },
    ],
    medium_term_actions: &[
        TitledItem {
            title: "Service Innovation",
            description: "Develop new {topic} models that improve patient outcomes and efficiency",
        },
        TitledItem {
            title: "Technology Platform",
            description: "Build integrated {topic} platform with comprehensive patient management",
        },
        TitledItem {
            title: "Partnership Development",
            description: "Establish collaborations with healthcare providers and technology partners",
        },
        TitledItem {
            title: "Quality Improvement",
            description: "Implement continuous quality improvement programs for {topic} excellence",
        },
    ],
    long_term_actions: &[
        TitledItem {
            title: "Healthcare Leadership",
            description: "Establish {topic} as model for healthcare innovation and excellence",
        },
        TitledItem {
            title: "Research Integration",
            description: "Integrate research and evidence-based practices into {topic} delivery",
        },
        TitledItem {
            title: "Community Health",
            description: "Expand {topic} impact on community health and wellness",
        },
        TitledItem {
            title: "Global Health",
            description: "Contribute to global health initiatives and {topic} best practices",
        },
    ],
    impact_assessment: "Strategic {topic} improvements are expected to deliver significant healthcare value through improved patient outcomes, operational efficiency, and healthcare accessibility. Healthcare organizations can anticipate 15-30% improvements in key healthcare metrics within 12-18 months.",
    success_metrics: &[
        "Patient satisfaction and health outcomes",
        "Healthcare delivery efficiency and cost-effectiveness",
        "Provider productivity and job satisfaction",
        "Healthcare accessibility and equity",
        "Quality of care and patient safety",
    ],
    future_outlook: "The {topic} field is evolving toward more integrated, technology-enabled healthcare delivery that prioritizes patient outcomes and healthcare equity. Organizations that embrace innovation and evidence-based practices will lead the transformation of healthcare delivery.",
    predictions: &[
        Prediction {
            timeframe: "6-12 months",
            prediction: "Increased adoption of digital health tools in {topic} delivery",
        },
        Prediction {
            timeframe: "1-2 years",
            prediction: "Integration of AI and machine learning in {topic} clinical decision-making",
        },
        Prediction {
            timeframe: "3-5 years",
            prediction: "Transformation of {topic} through personalized and precision medicine approaches",
        },
    ],
    resources: &[
        "\"{topic} Clinical Guidelines\" - Evidence-Based Practice Standards",
        "\"{topic} Quality Improvement Toolkit\" - Healthcare Excellence Framework",
        "\"{topic} Technology Integration Guide\" - Digital Health Implementation",
        "\"{topic} Patient Engagement Strategies\" - Healthcare Communication Best Practices",
        "\"{topic} Research Database\" - Clinical Evidence and Outcomes Data",
    ],
};
