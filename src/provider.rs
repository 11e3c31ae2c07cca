use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::kind;

/// Cloud provider theme. When active, components without an explicit `impl`
/// are annotated with the provider's product for their kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Gcp,
    Azure,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Gcp => "gcp",
            Provider::Azure => "azure",
        }
    }

    /// Border color given to every themed node.
    pub fn accent(self) -> &'static str {
        match self {
            Provider::Aws => "#ff9900",
            Provider::Gcp => "#4285f4",
            Provider::Azure => "#0078d4",
        }
    }

    pub fn implementation(self, kind: &str) -> Option<&'static str> {
        let table: &[(&str, &str)] = match self {
            Provider::Aws => &[
                (kind::GATEWAY, "API Gateway"),
                (kind::SERVICE, "EC2"),
                (kind::QUEUE, "SQS"),
                (kind::PUB_SUB, "SNS"),
                (kind::OBJECT_STORE, "S3"),
                (kind::RDB, "RDS"),
                (kind::DOCUMENT_STORE, "DynamoDB"),
                (kind::FUNCTION, "Lambda"),
                (kind::LOAD_BALANCER, "ELB"),
                (kind::CDN, "CloudFront"),
                (kind::DNS, "Route 53"),
                (kind::FIREWALL, "AWS WAF"),
                (kind::ORCHESTRATOR, "EKS"),
                (kind::BLOCK_STORE, "EBS"),
                (kind::CACHE, "ElastiCache"),
                (kind::FILE_STORE, "EFS"),
            ],
            Provider::Gcp => &[
                (kind::GATEWAY, "API Gateway"),
                (kind::SERVICE, "Compute Engine"),
                (kind::QUEUE, "Cloud Tasks"),
                (kind::PUB_SUB, "Pub/Sub"),
                (kind::OBJECT_STORE, "Cloud Storage"),
                (kind::RDB, "Cloud SQL"),
                (kind::DOCUMENT_STORE, "Firestore"),
                (kind::FUNCTION, "Cloud Functions"),
                (kind::LOAD_BALANCER, "Cloud Load Balancing"),
                (kind::CDN, "Cloud CDN"),
                (kind::DNS, "Cloud DNS"),
                (kind::FIREWALL, "Cloud Armor"),
                (kind::ORCHESTRATOR, "GKE"),
                (kind::BLOCK_STORE, "Persistent Disk"),
                (kind::CACHE, "Memorystore"),
                (kind::FILE_STORE, "Filestore"),
            ],
            Provider::Azure => &[
                (kind::GATEWAY, "API Management"),
                (kind::SERVICE, "Virtual Machines"),
                (kind::QUEUE, "Queue Storage"),
                (kind::PUB_SUB, "Service Bus"),
                (kind::OBJECT_STORE, "Blob Storage"),
                (kind::RDB, "Azure SQL Database"),
                (kind::DOCUMENT_STORE, "Cosmos DB"),
                (kind::FUNCTION, "Azure Functions"),
                (kind::LOAD_BALANCER, "Load Balancer"),
                (kind::CDN, "Azure CDN"),
                (kind::DNS, "Azure DNS"),
                (kind::FIREWALL, "Web Application Firewall"),
                (kind::ORCHESTRATOR, "AKS"),
                (kind::BLOCK_STORE, "Managed Disks"),
                (kind::CACHE, "Azure Cache for Redis"),
                (kind::FILE_STORE, "Azure Files"),
            ],
        };
        table
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, product)| *product)
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "gcp" | "google" => Ok(Provider::Gcp),
            "azure" => Ok(Provider::Azure),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
