//! Education-focused content.

use super::model::{AnalysisBundle, Prediction, Technology, TitledItem};

pub static EDUCATION: AnalysisBundle = AnalysisBundle {
    executive_summary: "The {topic} sector represents a transformative educational landscape with significant opportunities for innovation, accessibility, and learning outcomes improvement. Our analysis reveals key trends driving educational evolution and strategies for enhancing learning experiences.",
    insights: &[
        "Technology integration in {topic} is revolutionizing learning and teaching methods",
        "Personalized learning approaches are improving student engagement and outcomes",
        "Digital literacy and technology skills are becoming essential in {topic}",
        "Blended learning models are combining traditional and digital education approaches",
        "Data analytics are enabling evidence-based educational decision-making",
    ],
    market_analysis: "The {topic} market is experiencing rapid growth driven by digital transformation, changing learning preferences, and the need for accessible education. Educational institutions are investing in technology and innovative teaching methods to meet evolving student needs.",
    trends: &[
        TitledItem {
            title: "Personalized Learning",
            description: "Adaptive learning systems that customize education to individual student needs",
        },
        TitledItem {
            title: "Microlearning",
            description: "Bite-sized learning modules for flexible and accessible education",
        },
        TitledItem {
            title: "Gamification",
            description: "Game-based learning elements to increase student engagement and motivation",
        },
        TitledItem {
            title: "Competency-Based Education",
            description: "Learning models focused on skill mastery rather than time-based progression",
        },
    ],
    technology_analysis: "Educational technology adoption in {topic} is accelerating, with institutions implementing learning management systems, virtual reality tools, and AI-powered tutoring platforms. The integration of advanced technologies is transforming how students learn and teachers instruct.",
    technologies: &[
        Technology {
            name: "Learning Management Systems",
            description: "Comprehensive platforms for course delivery and student management",
        },
        Technology {
            name: "Virtual Reality",
            description: "Immersive learning experiences for enhanced engagement and understanding",
        },
        Technology {
            name: "AI Tutoring",
            description: "Intelligent tutoring systems for personalized learning support",
        },
        Technology {
            name: "Collaborative Tools",
            description: "Digital platforms for student collaboration and peer learning",
        },
    ],
    opportunities: &[
        "Expanding {topic} access to underserved populations and remote areas",
        "Developing innovative {topic} programs for emerging skills and industries",
        "Creating flexible learning pathways that accommodate diverse student needs",
        "Leveraging technology to enhance {topic} quality and accessibility",
        "Building partnerships to strengthen {topic} ecosystem and resources",
    ],
    challenges: &[
        "Ensuring equitable access to technology and digital resources",
        "Training educators to effectively use new {topic} technologies",
        "Maintaining quality standards while scaling {topic} programs",
        "Addressing digital divide and technology literacy gaps",
        "Balancing technology integration with human-centered learning",
    ],
    immediate_actions: &[
        TitledItem {
            title: "Technology Assessment",
            description: "Evaluate current {topic} technology infrastructure and identify improvement opportunities",
        },
        TitledItem {
            title: "Educator Training",
            description: "Invest in professional development for {topic} faculty and staff",
        },
        TitledItem {
            title: "Student Support",
            description: "Develop comprehensive support systems for {topic} learners",
        },
        TitledItem {
            title: "Curriculum Review",
            description: "Assess and update {topic} curriculum to meet current industry needs",
        },
    ],
    medium_term_actions: &[
        TitledItem {
            title: "Program Innovation",
            description: "Develop new {topic} programs that integrate technology and best practices",
        },
        TitledItem {
            title: "Platform Development",
            description: "Build integrated {topic} learning platform with comprehensive features",
        },
        TitledItem {
            title: "Partnership Building",
            description: "Establish collaborations with industry and educational partners",
        },
        TitledItem {
            title: "Quality Assurance",
            description: "Implement continuous improvement processes for {topic} excellence",
        },
    ],
    long_term_actions: &[
        TitledItem {
            title: "Educational Leadership",
            description: "Establish {topic} as leader in educational innovation and excellence",
        },
        TitledItem {
            title: "Research Integration",
            description: "Integrate educational research and evidence-based practices into {topic} delivery",
        },
        TitledItem {
            title: "Global Impact",
            description: "Expand {topic} influence on global education and learning outcomes",
        },
        TitledItem {
            title: "Future Learning",
            description: "Prepare for next-generation learning technologies and educational models",
        },
    ],
    impact_assessment: "Strategic {topic} improvements are expected to deliver significant educational value through enhanced learning outcomes, increased accessibility, and improved student engagement. Educational institutions can anticipate 20-40% improvements in key educational metrics within 12-18 months.",
    success_metrics: &[
        "Student learning outcomes and achievement",
        "Educational accessibility and equity",
        "Educator satisfaction and professional development",
        "Technology integration and digital literacy",
        "Program quality and accreditation standards",
    ],
    future_outlook: "The {topic} field is evolving toward more personalized, technology-enabled learning experiences that prioritize student success and educational equity. Institutions that embrace innovation and evidence-based practices will lead the transformation of education.",
    predictions: &[
        Prediction {
            timeframe: "6-12 months",
            prediction: "Increased adoption of blended learning models in {topic} programs",
        },
        Prediction {
            timeframe: "1-2 years",
            prediction: "Integration of AI and adaptive learning in {topic} curriculum delivery",
        },
        Prediction {
            timeframe: "3-5 years",
            prediction: "Transformation of {topic} through personalized and competency-based learning approaches",
        },
    ],
    resources: &[
        "\"{topic} Curriculum Framework\" - Educational Standards and Guidelines",
        "\"{topic} Technology Integration Guide\" - Digital Learning Implementation",
        "\"{topic} Assessment Toolkit\" - Learning Evaluation and Measurement",
        "\"{topic} Professional Development\" - Educator Training and Support",
        "\"{topic} Research Database\" - Educational Evidence and Best Practices",
    ],
};
