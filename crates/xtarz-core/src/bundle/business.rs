//! Business-focused content.

use super::model::{AnalysisBundle, Prediction, Technology, TitledItem};

pub static BUSINESS: AnalysisBundle = AnalysisBundle {
    executive_summary: "The {topic} sector represents a dynamic business environment with significant growth potential and evolving market dynamics. Our comprehensive analysis reveals key opportunities for strategic positioning, operational optimization, and sustainable competitive advantage.",
    insights: &[
        "Market demand for {topic} solutions is growing at 20-30% annually",
        "Digital transformation is reshaping traditional {topic} business models",
        "Customer expectations are driving innovation in {topic} service delivery",
        "Regulatory changes are creating new compliance requirements and opportunities",
        "Technology integration is becoming essential for {topic} competitiveness",
    ],
    market_analysis: "The {topic} market is characterized by increasing competition, evolving customer needs, and technological disruption. Market analysis indicates strong growth potential with emerging opportunities in digital services, automation, and customer experience enhancement.",
    trends: &[
        TitledItem {
            title: "Digital-First Approach",
            description: "Prioritizing digital channels and technology-driven customer experiences",
        },
        TitledItem {
            title: "Sustainability Focus",
            description: "Integrating environmental and social responsibility into business operations",
        },
        TitledItem {
            title: "Data-Driven Decision Making",
            description: "Leveraging analytics and insights for strategic planning and optimization",
        },
        TitledItem {
            title: "Customer-Centric Innovation",
            description: "Developing solutions based on deep understanding of customer needs and behaviors",
        },
    ],
    technology_analysis: "Technology adoption in {topic} is accelerating, with businesses investing in automation, analytics, and digital platforms to improve efficiency and customer experience. The integration of AI, cloud computing, and mobile technologies is transforming traditional business processes.",
    technologies: &[
        Technology {
            name: "Customer Relationship Management",
            description: "Advanced CRM systems for customer engagement and relationship management",
        },
        Technology {
            name: "Business Intelligence",
            description: "Analytics platforms for data-driven insights and decision making",
        },
        Technology {
            name: "Process Automation",
            description: "Workflow automation tools for operational efficiency",
        },
        Technology {
            name: "Digital Marketing",
            description: "Multi-channel marketing platforms for customer acquisition and retention",
        },
    ],
    opportunities: &[
        "Expanding {topic} services to new geographic markets",
        "Developing innovative {topic} solutions for underserved customer segments",
        "Creating strategic partnerships to enhance service offerings",
        "Leveraging technology to improve operational efficiency and customer experience",
        "Building sustainable competitive advantages through innovation and quality",
    ],
    challenges: &[
        "Managing increasing competition and market saturation",
        "Adapting to rapidly changing customer expectations and preferences",
        "Navigating regulatory compliance and legal requirements",
        "Investing in technology while maintaining profitability",
        "Attracting and retaining skilled talent in competitive market",
    ],
    immediate_actions: &[
        TitledItem {
            title: "Market Research",
            description: "Conduct comprehensive analysis of {topic} market opportunities and competitive landscape",
        },
        TitledItem {
            title: "Customer Analysis",
            description: "Deep dive into customer needs, preferences, and pain points",
        },
        TitledItem {
            title: "Technology Assessment",
            description: "Evaluate current technology infrastructure and identify improvement opportunities",
        },
        TitledItem {
            title: "Strategic Planning",
            description: "Develop comprehensive {topic} strategy with clear objectives and milestones",
        },
    ],
    medium_term_actions: &[
        TitledItem {
            title: "Service Innovation",
            description: "Develop new {topic} offerings that differentiate from competitors",
        },
        TitledItem {
            title: "Technology Implementation",
            description: "Deploy advanced systems for improved efficiency and customer experience",
        },
        TitledItem {
            title: "Partnership Development",
            description: "Establish strategic alliances to expand capabilities and reach",
        },
        TitledItem {
            title: "Market Expansion",
            description: "Scale {topic} operations to new markets and customer segments",
        },
    ],
    long_term_actions: &[
        TitledItem {
            title: "Market Leadership",
            description: "Establish {topic} as industry leader through innovation and excellence",
        },
        TitledItem {
            title: "Global Expansion",
            description: "Develop international {topic} presence and capabilities",
        },
        TitledItem {
            title: "Ecosystem Development",
            description: "Build comprehensive {topic} ecosystem with partners and stakeholders",
        },
        TitledItem {
            title: "Future Innovation",
            description: "Invest in next-generation {topic} technologies and business models",
        },
    ],
    impact_assessment: "Strategic {topic} initiatives are expected to deliver significant business value through improved customer satisfaction, operational efficiency, and market positioning. Organizations can anticipate 25-50% improvements in key business metrics within 18-24 months.",
    success_metrics: &[
        "Revenue growth and market share expansion",
        "Customer satisfaction and retention rates",
        "Operational efficiency and cost reduction",
        "Employee productivity and engagement",
        "Brand recognition and market positioning",
    ],
    future_outlook: "The {topic} industry is evolving toward more integrated, technology-driven solutions that prioritize customer experience and operational efficiency. Organizations that embrace innovation and adapt to changing market dynamics will thrive in the competitive landscape.",
    predictions: &[
        Prediction {
            timeframe: "6-12 months",
            prediction: "Increased focus on digital transformation in {topic} operations",
        },
        Prediction {
            timeframe: "1-2 years",
            prediction: "Consolidation and strategic partnerships reshaping {topic} landscape",
        },
        Prediction {
            timeframe: "3-5 years",
            prediction: "Technology integration becoming standard requirement for {topic} success",
        },
    ],
    resources: &[
        "\"{topic} Market Analysis Report\" - Industry Research and Insights",
        "\"{topic} Best Practices Guide\" - Operational Excellence Framework",
        "\"{topic} Technology Trends\" - Innovation and Digital Transformation",
        "\"{topic} Customer Research\" - Market Intelligence and Segmentation",
        "\"{topic} Strategic Planning Toolkit\" - Business Development Resources",
    ],
};
