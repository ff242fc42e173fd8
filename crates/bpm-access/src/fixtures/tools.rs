use bpm_model::{CatalogItem, CommonFields, ItemDetails, ToolDetails, ToolFamily};

struct Row<'a> {
    id: u64,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    tool_type: &'a str,
    industry: &'a str,
    use_case: &'a str,
    complexity: &'a str,
    risk_level: &'a str,
    integration: &'a str,
    feature: &'a str,
    ai_powered: bool,
    real_time: bool,
    ease_of_use: &'a str,
}

impl Row<'_> {
    fn build(&self, family: ToolFamily) -> CatalogItem {
        CatalogItem::new(
            CommonFields::new(self.id, self.title)
                .with_description(self.description)
                .with_category(self.category),
            ItemDetails::Tool(ToolDetails {
                family,
                tool_type: self.tool_type.to_string(),
                industry: self.industry.to_string(),
                use_case: self.use_case.to_string(),
                complexity: self.complexity.to_string(),
                risk_level: self.risk_level.to_string(),
                integration: self.integration.to_string(),
                feature: self.feature.to_string(),
                ai_powered: self.ai_powered,
                real_time: self.real_time,
                ease_of_use: self.ease_of_use.to_string(),
            }),
        )
    }
}

/// Performance-management tool catalog
#[must_use]
pub fn performance_tools() -> Vec<CatalogItem> {
    [
        Row {
            id: 1,
            title: "KPI Scorecard",
            description: "Balanced scorecard with drill-down KPI tracking.",
            category: "Performance Tracking",
            tool_type: "Dashboard",
            industry: "All Industries",
            use_case: "KPI Monitoring",
            complexity: "Low",
            risk_level: "Low",
            integration: "Excel",
            feature: "Scorecards",
            ai_powered: false,
            real_time: true,
            ease_of_use: "High",
        },
        Row {
            id: 2,
            title: "Goal Alignment Suite",
            description: "Cascade strategic goals into team and individual objectives.",
            category: "Goal Management",
            tool_type: "Platform",
            industry: "Technology",
            use_case: "OKR Management",
            complexity: "Medium",
            risk_level: "Low",
            integration: "Workday",
            feature: "OKRs",
            ai_powered: true,
            real_time: false,
            ease_of_use: "Medium",
        },
        Row {
            id: 3,
            title: "Forecast Studio",
            description: "Predictive performance forecasting from historical operations data.",
            category: "Analytics",
            tool_type: "Analytics",
            industry: "Manufacturing",
            use_case: "Forecasting",
            complexity: "High",
            risk_level: "Medium",
            integration: "SAP",
            feature: "Predictive Models",
            ai_powered: true,
            real_time: true,
            ease_of_use: "Low",
        },
        Row {
            id: 4,
            title: "Team Pulse",
            description: "Lightweight team health surveys and trend reports.",
            category: "Performance Tracking",
            tool_type: "Survey",
            industry: "All Industries",
            use_case: "Employee Engagement",
            complexity: "Low",
            risk_level: "Low",
            integration: "Microsoft Teams",
            feature: "Pulse Surveys",
            ai_powered: false,
            real_time: false,
            ease_of_use: "High",
        },
    ]
    .iter()
    .map(|row| row.build(ToolFamily::PerformanceManagement))
    .collect()
}

/// Process-mining tool catalog
#[must_use]
pub fn process_mining_tools() -> Vec<CatalogItem> {
    [
        Row {
            id: 1,
            title: "Process Discovery Engine",
            description: "Reconstructs as-is process maps from event logs.",
            category: "Discovery",
            tool_type: "Mining",
            industry: "All Industries",
            use_case: "Process Discovery",
            complexity: "Medium",
            risk_level: "Low",
            integration: "SAP",
            feature: "Event Log Mining",
            ai_powered: true,
            real_time: false,
            ease_of_use: "Medium",
        },
        Row {
            id: 2,
            title: "Conformance Checker",
            description: "Compares executed processes against the reference model.",
            category: "Conformance",
            tool_type: "Analysis",
            industry: "Financial Services",
            use_case: "Compliance Monitoring",
            complexity: "High",
            risk_level: "Medium",
            integration: "Oracle",
            feature: "Conformance Checking",
            ai_powered: false,
            real_time: true,
            ease_of_use: "Low",
        },
        Row {
            id: 3,
            title: "Bottleneck Finder",
            description: "Highlights waiting times and rework loops in live processes.",
            category: "Optimization",
            tool_type: "Analysis",
            industry: "Logistics",
            use_case: "Bottleneck Analysis",
            complexity: "Medium",
            risk_level: "Low",
            integration: "Salesforce",
            feature: "Root Cause Analysis",
            ai_powered: true,
            real_time: true,
            ease_of_use: "High",
        },
        Row {
            id: 4,
            title: "Task Mining Recorder",
            description: "Captures desktop activity to reveal manual work patterns.",
            category: "Discovery",
            tool_type: "Task Mining",
            industry: "Insurance",
            use_case: "Automation Discovery",
            complexity: "Low",
            risk_level: "Medium",
            integration: "ServiceNow",
            feature: "Desktop Capture",
            ai_powered: false,
            real_time: false,
            ease_of_use: "High",
        },
    ]
    .iter()
    .map(|row| row.build(ToolFamily::ProcessMining))
    .collect()
}

/// Risk-management tool catalog
#[must_use]
pub fn risk_tools() -> Vec<CatalogItem> {
    [
        Row {
            id: 1,
            title: "Risk Register",
            description: "Central register for enterprise risks and mitigations.",
            category: "Risk Assessment",
            tool_type: "Register",
            industry: "All Industries",
            use_case: "Risk Tracking",
            complexity: "Low",
            risk_level: "Medium",
            integration: "Excel",
            feature: "Heat Maps",
            ai_powered: false,
            real_time: false,
            ease_of_use: "High",
        },
        Row {
            id: 2,
            title: "Control Monitor",
            description: "Continuous monitoring of key internal controls.",
            category: "Compliance",
            tool_type: "Monitoring",
            industry: "Financial Services",
            use_case: "Control Testing",
            complexity: "High",
            risk_level: "High",
            integration: "SAP",
            feature: "Continuous Monitoring",
            ai_powered: true,
            real_time: true,
            ease_of_use: "Medium",
        },
        Row {
            id: 3,
            title: "Third-Party Risk Hub",
            description: "Vendor risk questionnaires and scoring.",
            category: "Vendor Risk",
            tool_type: "Platform",
            industry: "Healthcare",
            use_case: "Vendor Assessment",
            complexity: "Medium",
            risk_level: "High",
            integration: "Coupa",
            feature: "Risk Scoring",
            ai_powered: true,
            real_time: false,
            ease_of_use: "Medium",
        },
        Row {
            id: 4,
            title: "Incident Tracker",
            description: "Log and investigate operational loss events.",
            category: "Risk Assessment",
            tool_type: "Tracker",
            industry: "Banking",
            use_case: "Incident Management",
            complexity: "Low",
            risk_level: "Medium",
            integration: "ServiceNow",
            feature: "Workflow Automation",
            ai_powered: false,
            real_time: true,
            ease_of_use: "High",
        },
    ]
    .iter()
    .map(|row| row.build(ToolFamily::RiskManagement))
    .collect()
}
