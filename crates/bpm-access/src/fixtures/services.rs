use super::strings;
use bpm_model::{CatalogItem, CommonFields, ItemDetails, ServiceDetails};

struct Row<'a> {
    id: u64,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    department: &'a str,
    service_type: &'a str,
    priority: &'a str,
    complexity: &'a str,
    delivery_time: &'a str,
    owner: &'a str,
    features: &'a [&'a str],
    requirements: &'a [&'a str],
    steps: &'a [&'a str],
}

fn service(row: &Row<'_>) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(row.id, row.title)
            .with_description(row.description)
            .with_category(row.category)
            .with_department(row.department),
        ItemDetails::Service(ServiceDetails {
            service_type: row.service_type.to_string(),
            priority: row.priority.to_string(),
            complexity: row.complexity.to_string(),
            delivery_time: row.delivery_time.to_string(),
            owner: row.owner.to_string(),
            features: strings(row.features),
            requirements: strings(row.requirements),
            process_steps: strings(row.steps),
        }),
    )
}

/// Fallback service catalog
#[must_use]
pub fn services() -> Vec<CatalogItem> {
    [
        Row {
            id: 1,
            title: "Employee Onboarding",
            description: "End-to-end onboarding of new hires including accounts, equipment and orientation.",
            category: "Human Resources",
            department: "HR",
            service_type: "Process",
            priority: "High",
            complexity: "Medium",
            delivery_time: "5 days",
            owner: "Sarah Johnson",
            features: &["Automated account provisioning", "Equipment tracking", "Orientation scheduling"],
            requirements: &["Signed contract", "Manager approval"],
            steps: &["Submit request", "Provision accounts", "Assign equipment", "Orientation"],
        },
        Row {
            id: 2,
            title: "Purchase Order Approval",
            description: "Multi-level approval workflow for purchase orders above the spending threshold.",
            category: "Finance",
            department: "Finance",
            service_type: "Workflow",
            priority: "Medium",
            complexity: "Low",
            delivery_time: "2 days",
            owner: "Michael Chen",
            features: &["Threshold routing", "Budget check"],
            requirements: &["Cost center", "Vendor quote"],
            steps: &["Create PO", "Budget validation", "Approval", "Release to vendor"],
        },
        Row {
            id: 3,
            title: "IT Access Request",
            description: "Request access to business applications and shared drives.",
            category: "IT Services",
            department: "IT",
            service_type: "Request",
            priority: "High",
            complexity: "Low",
            delivery_time: "1 day",
            owner: "David Kim",
            features: &["Role-based templates", "Audit trail"],
            requirements: &["Manager approval"],
            steps: &["Submit request", "Approve", "Grant access"],
        },
        Row {
            id: 4,
            title: "Contract Review",
            description: "Legal review of supplier and customer contracts before signature.",
            category: "Legal",
            department: "Legal",
            service_type: "Review",
            priority: "Medium",
            complexity: "High",
            delivery_time: "10 days",
            owner: "Emily Davis",
            features: &["Clause library", "Redline tracking", "Risk scoring"],
            requirements: &["Draft contract", "Business owner"],
            steps: &["Intake", "Legal review", "Negotiation", "Sign-off"],
        },
        Row {
            id: 5,
            title: "Expense Reimbursement",
            description: "Submit and reimburse business travel and expense claims.",
            category: "Finance",
            department: "Finance",
            service_type: "Request",
            priority: "Low",
            complexity: "Low",
            delivery_time: "3 days",
            owner: "Michael Chen",
            features: &["Receipt capture", "Policy checks"],
            requirements: &["Receipts"],
            steps: &["Submit claim", "Policy check", "Approve", "Pay out"],
        },
        Row {
            id: 6,
            title: "Process Improvement Workshop",
            description: "Facilitated workshop to map and optimise an existing business process.",
            category: "Operations",
            department: "Operations",
            service_type: "Consulting",
            priority: "Medium",
            complexity: "High",
            delivery_time: "15 days",
            owner: "Robert Wilson",
            features: &["As-is mapping", "Bottleneck analysis", "To-be design", "KPI definition"],
            requirements: &["Process owner", "Stakeholder availability"],
            steps: &["Scoping", "Discovery", "Workshop", "Report"],
        },
        Row {
            id: 7,
            title: "Vendor Onboarding",
            description: "Register and qualify new suppliers in the procurement system.",
            category: "Procurement",
            department: "Procurement",
            service_type: "Process",
            priority: "Critical",
            complexity: "Medium",
            delivery_time: "7 days",
            owner: "Lisa Anderson",
            features: &["Due diligence checklist", "Bank detail verification"],
            requirements: &["Tax documents", "Insurance certificate"],
            steps: &["Registration", "Due diligence", "Approval", "Activation"],
        },
        Row {
            id: 8,
            title: "Policy Exception Request",
            description: "Request a documented exception to a corporate policy.",
            category: "Compliance",
            department: "Compliance",
            service_type: "Request",
            priority: "High",
            complexity: "Medium",
            delivery_time: "4 days",
            owner: "James Taylor",
            features: &["Risk acceptance", "Expiry tracking"],
            requirements: &["Business justification"],
            steps: &["Submit", "Risk assessment", "Decision"],
        },
    ]
    .iter()
    .map(service)
    .collect()
}
