use rust_decimal::Decimal;

use super::vaults_model::{CatalogOverview, VaultSort, VaultSummary};

/// Case-insensitive match on name or description. A blank query keeps everything.
pub fn search_vaults(vaults: &[VaultSummary], query: &str) -> Vec<VaultSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vaults.to_vec();
    }
    vaults
        .iter()
        .filter(|vault| {
            vault.name.to_lowercase().contains(&query)
                || vault.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Orders vaults for display. All orderings are stable.
pub fn sort_vaults(vaults: &[VaultSummary], sort: VaultSort) -> Vec<VaultSummary> {
    let mut sorted = vaults.to_vec();
    match sort {
        VaultSort::All => {}
        VaultSort::TopApr => sorted.sort_by(|a, b| b.apr.cmp(&a.apr)),
        VaultSort::LowestRisk => sorted.sort_by_key(|vault| vault.risk_level),
        VaultSort::Newest => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
    }
    sorted
}

pub fn catalog_overview(vaults: &[VaultSummary]) -> CatalogOverview {
    let total_tvl: Decimal = vaults.iter().map(|vault| vault.tvl).sum();
    let average_apr = if vaults.is_empty() {
        Decimal::ZERO
    } else {
        vaults.iter().map(|vault| vault.apr).sum::<Decimal>() / Decimal::from(vaults.len())
    };

    CatalogOverview {
        vault_count: vaults.len(),
        total_tvl,
        average_apr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaults::RiskLevel;
    use rust_decimal_macros::dec;

    fn vault(id: &str, name: &str, apr: Decimal, tvl: Decimal, risk_level: RiskLevel) -> VaultSummary {
        VaultSummary {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} liquidity vault", name),
            apr,
            tvl,
            risk_level,
        }
    }

    fn catalog() -> Vec<VaultSummary> {
        vec![
            vault("v3", "SUI-USDC", dec!(15.2), dec!(1200000), RiskLevel::Low),
            vault("v1", "DEEP-SUI", dec!(21.5), dec!(800000), RiskLevel::High),
            vault("v2", "CETUS-SUI", dec!(18.9), dec!(500000), RiskLevel::Medium),
            vault("v4", "Stable Yield", dec!(18.9), dec!(0), RiskLevel::Low),
        ]
    }

    fn ids(vaults: &[VaultSummary]) -> Vec<&str> {
        vaults.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let vaults = catalog();
        assert_eq!(ids(&search_vaults(&vaults, "sui")), vec!["v3", "v1", "v2"]);
        assert_eq!(ids(&search_vaults(&vaults, "  STABLE ")), vec!["v4"]);
        assert_eq!(search_vaults(&vaults, "liquidity").len(), 4);
        assert_eq!(search_vaults(&vaults, "   ").len(), 4);
        assert!(search_vaults(&vaults, "btc").is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let vaults = catalog();
        assert_eq!(ids(&sort_vaults(&vaults, VaultSort::All)), vec!["v3", "v1", "v2", "v4"]);
        assert_eq!(ids(&sort_vaults(&vaults, VaultSort::TopApr)), vec!["v1", "v2", "v4", "v3"]);
        assert_eq!(
            ids(&sort_vaults(&vaults, VaultSort::LowestRisk)),
            vec!["v3", "v4", "v2", "v1"]
        );
        assert_eq!(ids(&sort_vaults(&vaults, VaultSort::Newest)), vec!["v1", "v2", "v3", "v4"]);
    }

    #[test]
    fn test_catalog_overview() {
        let overview = catalog_overview(&catalog());
        assert_eq!(overview.vault_count, 4);
        assert_eq!(overview.total_tvl, dec!(2500000));
        assert_eq!(overview.average_apr, dec!(18.625));
    }

    #[test]
    fn test_empty_catalog_overview_is_zero() {
        assert_eq!(catalog_overview(&[]), CatalogOverview::default());
    }
}
