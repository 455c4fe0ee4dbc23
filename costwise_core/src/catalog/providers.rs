//! Service Provider Catalog
//!
//! Representative named providers per scope tier and service category.
//! Selecting a provider overrides the category's base monthly cost with the
//! provider's listed figure. The catalog is illustrative: entries name real
//! services with ballpark monthly prices, not negotiated rates.
//!
//! A missing scope/category combination means "no providers available" and
//! yields an empty slice, never an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{Scope, ServiceCategory};

/// One named provider option for a service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    /// Display name (e.g., "Vercel Pro")
    pub name: String,

    /// Listed base monthly cost in currency units
    pub base_cost: f64,

    /// One-line description of what the plan covers
    pub description: String,
}

impl ServiceProvider {
    fn new(name: &str, base_cost: f64, description: &str) -> Self {
        ServiceProvider {
            name: name.to_string(),
            base_cost,
            description: description.to_string(),
        }
    }
}

type CatalogKey = (Scope, ServiceCategory);

static CATALOG: Lazy<HashMap<CatalogKey, Vec<ServiceProvider>>> = Lazy::new(build_catalog);

/// Providers for a scope/category combination.
///
/// Returns an empty slice when no providers are catalogued, including for
/// [`ServiceCategory::OtherServices`] which is entirely user-entered.
pub fn providers_for(scope: Scope, category: ServiceCategory) -> &'static [ServiceProvider] {
    CATALOG
        .get(&(scope, category))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Find a catalogued provider by name for a scope/category combination.
pub fn find_provider(
    scope: Scope,
    category: ServiceCategory,
    name: &str,
) -> Option<&'static ServiceProvider> {
    providers_for(scope, category).iter().find(|p| p.name == name)
}

fn build_catalog() -> HashMap<CatalogKey, Vec<ServiceProvider>> {
    let mut catalog: HashMap<CatalogKey, Vec<ServiceProvider>> = HashMap::new();
    let mut add = |scope: Scope, category: ServiceCategory, providers: Vec<ServiceProvider>| {
        catalog.insert((scope, category), providers);
    };

    // --- Proof of Concept -------------------------------------------------
    add(
        Scope::Poc,
        ServiceCategory::Hosting,
        vec![
            ServiceProvider::new("Vercel Hobby", 0.0, "Free static and serverless hosting for personal projects"),
            ServiceProvider::new("Netlify Starter", 0.0, "Free tier with 100GB bandwidth per month"),
            ServiceProvider::new("Railway Hobby", 5.0, "Usage-based container hosting with a small monthly credit"),
        ],
    );
    add(
        Scope::Poc,
        ServiceCategory::Database,
        vec![
            ServiceProvider::new("Supabase Free", 0.0, "Hosted Postgres with 500MB storage"),
            ServiceProvider::new("Neon Free", 0.0, "Serverless Postgres that scales to zero"),
            ServiceProvider::new("MongoDB Atlas M0", 0.0, "Shared cluster with 512MB storage"),
        ],
    );
    add(
        Scope::Poc,
        ServiceCategory::Cdn,
        vec![
            ServiceProvider::new("Cloudflare Free", 0.0, "Global CDN with unmetered bandwidth"),
            ServiceProvider::new("jsDelivr", 0.0, "Free CDN for open-source assets"),
        ],
    );
    add(
        Scope::Poc,
        ServiceCategory::Cicd,
        vec![
            ServiceProvider::new("GitHub Actions Free", 0.0, "2000 CI minutes per month on free plans"),
            ServiceProvider::new("GitLab CI Free", 0.0, "400 compute minutes per month"),
        ],
    );
    add(
        Scope::Poc,
        ServiceCategory::Storage,
        vec![
            ServiceProvider::new("Cloudflare R2", 0.0, "10GB free object storage, no egress fees"),
            ServiceProvider::new("Backblaze B2", 1.0, "10GB free, then $6/TB per month"),
        ],
    );
    add(
        Scope::Poc,
        ServiceCategory::Authentication,
        vec![
            ServiceProvider::new("Supabase Auth", 0.0, "Included with Supabase projects up to 50k MAU"),
            ServiceProvider::new("Firebase Auth", 0.0, "Free email/password and social sign-in"),
            ServiceProvider::new("Clerk Free", 0.0, "Up to 10k MAU with prebuilt components"),
        ],
    );

    // --- Minimum Viable Product -------------------------------------------
    add(
        Scope::Mvp,
        ServiceCategory::Hosting,
        vec![
            ServiceProvider::new("Vercel Pro", 20.0, "Team hosting with higher bandwidth and analytics"),
            ServiceProvider::new("Render Standard", 25.0, "Managed web services with autoscaling"),
            ServiceProvider::new("DigitalOcean Droplets", 48.0, "Two general-purpose VMs with load balancer"),
        ],
    );
    add(
        Scope::Mvp,
        ServiceCategory::Database,
        vec![
            ServiceProvider::new("Supabase Pro", 25.0, "8GB database with daily backups"),
            ServiceProvider::new("AWS RDS t4g.small", 35.0, "Managed Postgres, single AZ"),
            ServiceProvider::new("MongoDB Atlas M10", 57.0, "Dedicated cluster with 10GB storage"),
        ],
    );
    add(
        Scope::Mvp,
        ServiceCategory::Cdn,
        vec![
            ServiceProvider::new("Cloudflare Pro", 20.0, "Image optimization and WAF rules"),
            ServiceProvider::new("AWS CloudFront", 25.0, "Pay-as-you-go edge caching, typical MVP volume"),
            ServiceProvider::new("Fastly", 50.0, "Real-time purging and edge compute"),
        ],
    );
    add(
        Scope::Mvp,
        ServiceCategory::Cicd,
        vec![
            ServiceProvider::new("GitHub Actions Team", 30.0, "3000 CI minutes plus private runners"),
            ServiceProvider::new("CircleCI Performance", 15.0, "Credit-based plan for small teams"),
            ServiceProvider::new("Buildkite", 35.0, "Hybrid runners on your own compute"),
        ],
    );
    add(
        Scope::Mvp,
        ServiceCategory::Storage,
        vec![
            ServiceProvider::new("AWS S3", 15.0, "Standard storage plus request costs, typical MVP volume"),
            ServiceProvider::new("Google Cloud Storage", 13.0, "Standard buckets, multi-region"),
            ServiceProvider::new("Cloudflare R2", 8.0, "No egress fees, S3-compatible API"),
        ],
    );
    add(
        Scope::Mvp,
        ServiceCategory::Authentication,
        vec![
            ServiceProvider::new("Auth0 Essentials", 35.0, "Up to 500 MAU with custom domains"),
            ServiceProvider::new("Clerk Pro", 25.0, "10k MAU included, then usage-based"),
            ServiceProvider::new("AWS Cognito", 10.0, "Pay per MAU beyond the free tier"),
        ],
    );

    // --- Production Application -------------------------------------------
    add(
        Scope::Production,
        ServiceCategory::Hosting,
        vec![
            ServiceProvider::new("AWS ECS Fargate", 150.0, "Containerized services across two AZs"),
            ServiceProvider::new("GCP Cloud Run", 120.0, "Autoscaling containers with committed use discount"),
            ServiceProvider::new("Azure App Service P1v3", 140.0, "Premium plan with staging slots"),
        ],
    );
    add(
        Scope::Production,
        ServiceCategory::Database,
        vec![
            ServiceProvider::new("AWS RDS Multi-AZ", 180.0, "Managed Postgres with standby replica"),
            ServiceProvider::new("AWS Aurora", 220.0, "Serverless v2 with read replicas"),
            ServiceProvider::new("MongoDB Atlas M30", 185.0, "Dedicated cluster with 40GB storage"),
        ],
    );
    add(
        Scope::Production,
        ServiceCategory::Cdn,
        vec![
            ServiceProvider::new("AWS CloudFront", 75.0, "Production traffic with origin shield"),
            ServiceProvider::new("Cloudflare Business", 200.0, "SLA-backed CDN with advanced WAF"),
            ServiceProvider::new("Fastly", 120.0, "Edge compute and instant purging at volume"),
        ],
    );
    add(
        Scope::Production,
        ServiceCategory::Cicd,
        vec![
            ServiceProvider::new("GitHub Actions Enterprise", 100.0, "50k CI minutes with larger runners"),
            ServiceProvider::new("CircleCI Scale", 150.0, "High-concurrency credit plan"),
            ServiceProvider::new("Self-hosted Jenkins", 80.0, "Two build agents on cloud VMs"),
        ],
    );
    add(
        Scope::Production,
        ServiceCategory::Storage,
        vec![
            ServiceProvider::new("AWS S3 + Replication", 50.0, "Cross-region replication and lifecycle rules"),
            ServiceProvider::new("Google Cloud Storage", 45.0, "Dual-region buckets with versioning"),
        ],
    );
    add(
        Scope::Production,
        ServiceCategory::Authentication,
        vec![
            ServiceProvider::new("Auth0 Professional", 80.0, "MFA, adaptive security, higher MAU tiers"),
            ServiceProvider::new("Okta Customer Identity", 90.0, "Enterprise SSO and directory integration"),
            ServiceProvider::new("AWS Cognito", 40.0, "Pay per MAU at production volume"),
        ],
    );

    catalog
}
