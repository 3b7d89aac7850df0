//! Technology-focused content.

use super::model::{AnalysisBundle, Prediction, Technology, TitledItem};

pub static TECHNOLOGY: AnalysisBundle = AnalysisBundle {
    executive_summary: "The {topic} landscape represents a rapidly evolving technological frontier with significant implications for digital transformation, innovation, and competitive advantage. Our analysis reveals a complex ecosystem driven by emerging technologies, changing consumer expectations, and regulatory considerations.",
    insights: &[
        "Rapid adoption of {topic} technologies is accelerating digital transformation across industries",
        "Integration challenges remain a primary barrier to widespread implementation",
        "Security and privacy concerns are driving regulatory frameworks and compliance requirements",
        "AI and machine learning are becoming integral components of {topic} solutions",
        "Cloud-native architectures are becoming the standard for scalable {topic} implementations",
    ],
    market_analysis: "The global {topic} market is experiencing unprecedented growth, driven by increased digitalization, remote work trends, and the need for operational efficiency. Market research indicates a compound annual growth rate of 15-25% over the next five years, with enterprise adoption leading the charge.",
    trends: &[
        TitledItem {
            title: "Edge Computing Integration",
            description: "Moving processing closer to data sources for reduced latency and improved performance",
        },
        TitledItem {
            title: "AI-First Architecture",
            description: "Designing systems with artificial intelligence as a core component from the ground up",
        },
        TitledItem {
            title: "Zero-Trust Security Models",
            description: "Implementing security frameworks that verify every access request regardless of location",
        },
        TitledItem {
            title: "Sustainable Technology Practices",
            description: "Focusing on energy-efficient solutions and environmentally conscious implementations",
        },
    ],
    technology_analysis: "Current {topic} implementations are leveraging cutting-edge technologies including cloud computing, artificial intelligence, and advanced analytics. The convergence of these technologies is creating new possibilities for automation, optimization, and user experience enhancement.",
    technologies: &[
        Technology {
            name: "Cloud Computing",
            description: "Scalable infrastructure enabling flexible deployment and management",
        },
        Technology {
            name: "Artificial Intelligence",
            description: "Machine learning algorithms for intelligent automation and decision-making",
        },
        Technology {
            name: "API-First Architecture",
            description: "Modular design enabling seamless integration and interoperability",
        },
        Technology {
            name: "Real-time Analytics",
            description: "Instant data processing for immediate insights and responses",
        },
    ],
    opportunities: &[
        "Expanding {topic} capabilities to underserved markets and demographics",
        "Developing specialized solutions for industry-specific use cases",
        "Creating integrated platforms that combine multiple {topic} functionalities",
        "Building partnerships with complementary technology providers",
        "Leveraging data analytics for predictive insights and optimization",
    ],
    challenges: &[
        "Managing complex integration requirements across diverse systems",
        "Ensuring data security and compliance with evolving regulations",
        "Addressing skills gaps in {topic} implementation and management",
        "Balancing innovation with stability and reliability requirements",
        "Managing costs while maintaining competitive pricing",
    ],
    immediate_actions: &[
        TitledItem {
            title: "Technology Assessment",
            description: "Conduct comprehensive evaluation of current {topic} infrastructure and capabilities",
        },
        TitledItem {
            title: "Security Audit",
            description: "Review and strengthen security measures to meet industry standards",
        },
        TitledItem {
            title: "Team Training",
            description: "Invest in upskilling team members on latest {topic} technologies and best practices",
        },
        TitledItem {
            title: "Pilot Implementation",
            description: "Launch small-scale {topic} projects to test feasibility and gather feedback",
        },
    ],
    medium_term_actions: &[
        TitledItem {
            title: "Platform Integration",
            description: "Develop comprehensive {topic} platform with seamless user experience",
        },
        TitledItem {
            title: "Data Strategy",
            description: "Implement advanced analytics and data management capabilities",
        },
        TitledItem {
            title: "Partnership Development",
            description: "Establish strategic partnerships with key technology providers",
        },
        TitledItem {
            title: "Market Expansion",
            description: "Scale {topic} solutions to new markets and customer segments",
        },
    ],
    long_term_actions: &[
        TitledItem {
            title: "Innovation Leadership",
            description: "Position as thought leader in {topic} innovation and best practices",
        },
        TitledItem {
            title: "Global Expansion",
            description: "Establish {topic} presence in international markets",
        },
        TitledItem {
            title: "Ecosystem Development",
            description: "Build comprehensive {topic} ecosystem with partners and developers",
        },
        TitledItem {
            title: "Future Technology Integration",
            description: "Prepare for next-generation technologies and emerging trends",
        },
    ],
    impact_assessment: "Successful {topic} implementation is expected to deliver significant improvements in operational efficiency, customer satisfaction, and competitive positioning. Organizations can expect 20-40% improvements in key performance metrics within 12-18 months of full deployment.",
    success_metrics: &[
        "User adoption rate and engagement levels",
        "System performance and reliability metrics",
        "Cost reduction and efficiency improvements",
        "Customer satisfaction and retention rates",
        "Market share and competitive positioning",
    ],
    future_outlook: "The {topic} landscape is poised for continued evolution, with emerging technologies like quantum computing, advanced AI, and next-generation networking expected to reshape the industry. Organizations that invest in flexible, scalable solutions today will be best positioned to capitalize on future opportunities.",
    predictions: &[
        Prediction {
            timeframe: "6-12 months",
            prediction: "Increased adoption of {topic} solutions driven by proven ROI and competitive advantages",
        },
        Prediction {
            timeframe: "1-2 years",
            prediction: "Integration of advanced AI capabilities becoming standard in {topic} platforms",
        },
        Prediction {
            timeframe: "3-5 years",
            prediction: "Transformation of {topic} from specialized tool to essential business infrastructure",
        },
    ],
    resources: &[
        "\"{topic} Best Practices Guide\" - Industry Standards Documentation",
        "\"{topic} Implementation Framework\" - Technical Architecture Guide",
        "\"{topic} Security Guidelines\" - Cybersecurity Best Practices",
        "\"{topic} ROI Calculator\" - Business Value Assessment Tool",
        "\"{topic} Community Forum\" - Expert Network and Support",
    ],
};
