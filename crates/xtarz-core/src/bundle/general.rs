//! Content served when no keyword matches.

use super::model::{AnalysisBundle, Prediction, Technology, TitledItem};

pub static GENERAL: AnalysisBundle = AnalysisBundle {
    executive_summary: "The {topic} represents a multifaceted subject with significant implications across various domains. Our comprehensive analysis reveals key opportunities for growth, innovation, and strategic development in this evolving landscape.",
    insights: &[
        "Growing interest and adoption of {topic} across multiple sectors",
        "Technology integration is transforming traditional {topic} approaches",
        "Market demand for {topic} solutions is increasing steadily",
        "Innovation and creativity are driving {topic} evolution",
        "Collaboration and partnerships are essential for {topic} success",
    ],
    market_analysis: "The {topic} market is characterized by diverse opportunities and evolving dynamics. Market analysis indicates strong potential for growth and development across various sectors and applications.",
    trends: &[
        TitledItem {
            title: "Digital Transformation",
            description: "Integration of digital technologies to enhance {topic} capabilities and reach",
        },
        TitledItem {
            title: "Sustainability Focus",
            description: "Emphasis on environmentally conscious and sustainable {topic} practices",
        },
        TitledItem {
            title: "Innovation Culture",
            description: "Fostering creativity and innovation in {topic} development and implementation",
        },
        TitledItem {
            title: "Collaborative Approach",
            description: "Building partnerships and networks to strengthen {topic} ecosystem",
        },
    ],
    technology_analysis: "Technology adoption in {topic} is accelerating, with organizations leveraging digital tools, data analytics, and innovative platforms to enhance capabilities and outcomes. The integration of advanced technologies is creating new possibilities for growth and development.",
    technologies: &[
        Technology {
            name: "Data Analytics",
            description: "Advanced analytics tools for insights and decision-making",
        },
        Technology {
            name: "Digital Platforms",
            description: "Online systems for enhanced accessibility and engagement",
        },
        Technology {
            name: "Automation Tools",
            description: "Process automation for improved efficiency and productivity",
        },
        Technology {
            name: "Collaboration Software",
            description: "Digital tools for enhanced communication and teamwork",
        },
    ],
    opportunities: &[
        "Expanding {topic} reach to new markets and audiences",
        "Developing innovative {topic} solutions for emerging needs",
        "Creating strategic partnerships to enhance {topic} capabilities",
        "Leveraging technology to improve {topic} efficiency and effectiveness",
        "Building sustainable {topic} practices for long-term success",
    ],
    challenges: &[
        "Managing complexity and diverse stakeholder needs",
        "Ensuring quality and consistency in {topic} delivery",
        "Adapting to changing market conditions and requirements",
        "Balancing innovation with stability and reliability",
        "Building and maintaining strong {topic} networks and relationships",
    ],
    immediate_actions: &[
        TitledItem {
            title: "Strategic Assessment",
            description: "Conduct comprehensive evaluation of {topic} current state and opportunities",
        },
        TitledItem {
            title: "Stakeholder Engagement",
            description: "Build relationships with key {topic} stakeholders and partners",
        },
        TitledItem {
            title: "Capacity Building",
            description: "Invest in skills development and capability enhancement",
        },
        TitledItem {
            title: "Pilot Projects",
            description: "Launch small-scale {topic} initiatives to test and refine approaches",
        },
    ],
    medium_term_actions: &[
        TitledItem {
            title: "Program Development",
            description: "Develop comprehensive {topic} programs and initiatives",
        },
        TitledItem {
            title: "Technology Integration",
            description: "Implement digital tools and platforms to enhance {topic} capabilities",
        },
        TitledItem {
            title: "Partnership Development",
            description: "Establish strategic alliances to strengthen {topic} ecosystem",
        },
        TitledItem {
            title: "Quality Improvement",
            description: "Implement continuous improvement processes for {topic} excellence",
        },
    ],
    long_term_actions: &[
        TitledItem {
            title: "Leadership Position",
            description: "Establish {topic} as recognized leader in the field",
        },
        TitledItem {
            title: "Innovation Hub",
            description: "Create center of excellence for {topic} innovation and development",
        },
        TitledItem {
            title: "Global Impact",
            description: "Expand {topic} influence and impact on broader scale",
        },
        TitledItem {
            title: "Future Vision",
            description: "Develop long-term vision for {topic} evolution and growth",
        },
    ],
    impact_assessment: "Strategic {topic} initiatives are expected to deliver significant value through improved outcomes, enhanced capabilities, and strengthened relationships. Organizations can anticipate 15-30% improvements in key performance metrics within 12-18 months.",
    success_metrics: &[
        "Outcome achievement and goal completion",
        "Stakeholder satisfaction and engagement",
        "Process efficiency and effectiveness",
        "Innovation and creativity indicators",
        "Partnership and collaboration strength",
    ],
    future_outlook: "The {topic} landscape is evolving toward more integrated, technology-enabled approaches that prioritize innovation, collaboration, and sustainable growth. Organizations that embrace change and invest in capability development will thrive in the evolving environment.",
    predictions: &[
        Prediction {
            timeframe: "6-12 months",
            prediction: "Increased focus on digital transformation in {topic} practices",
        },
        Prediction {
            timeframe: "1-2 years",
            prediction: "Emergence of new {topic} models and approaches",
        },
        Prediction {
            timeframe: "3-5 years",
            prediction: "Transformation of {topic} through technology integration and innovation",
        },
    ],
    resources: &[
        "\"{topic} Best Practices Guide\" - Industry Standards and Guidelines",
        "\"{topic} Innovation Toolkit\" - Creative Development Resources",
        "\"{topic} Technology Integration\" - Digital Transformation Guide",
        "\"{topic} Partnership Framework\" - Collaboration and Network Building",
        "\"{topic} Future Trends\" - Strategic Planning and Development",
    ],
};
