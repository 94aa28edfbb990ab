//! Entity directory endpoints: countries and regions.

use hd_core::{Country, Group};

use crate::WorldBankClient;
use crate::error::WorldBankError;
use crate::source::EntityDirectory;

impl WorldBankClient {
    /// Every country in the directory, aggregates removed.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError`] if the request fails or the response is
    /// not a World Bank envelope.
    pub async fn list_countries(&self) -> Result<Vec<Country>, WorldBankError> {
        let url = self.endpoint(&format!(
            "country?format=json&per_page={}",
            self.settings.directory_page_size
        ));
        let countries: Vec<Country> = self.fetch_records(&url).await?;
        Ok(countries
            .into_iter()
            .filter(|country| !country.is_aggregate())
            .collect())
    }

    /// Countries filed under `region`, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError`] if the request fails or the response is
    /// not a World Bank envelope.
    pub async fn list_countries_in_region(
        &self,
        region: &str,
    ) -> Result<Vec<Country>, WorldBankError> {
        let url = self.endpoint(&format!(
            "country?region={}&format=json&per_page={}",
            urlencoding::encode(region),
            self.settings.directory_page_size
        ));
        self.fetch_records(&url).await
    }

    /// Region groupings known to the API.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError`] if the request fails or the response is
    /// not a World Bank envelope.
    pub async fn list_regions(&self) -> Result<Vec<Group>, WorldBankError> {
        let url = self.endpoint(&format!(
            "region?format=json&per_page={}",
            self.settings.directory_page_size
        ));
        self.fetch_records(&url).await
    }
}

impl EntityDirectory for WorldBankClient {
    async fn all_countries(&self) -> Result<Vec<Country>, WorldBankError> {
        self.list_countries().await
    }

    async fn countries_in_region(&self, region: &str) -> Result<Vec<Country>, WorldBankError> {
        self.list_countries_in_region(region).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope;
    use serde_json::json;

    #[test]
    fn region_record_maps_to_group() {
        let body = json!([
            {"page": 1, "pages": 1, "per_page": "50", "total": 2},
            [
                {"id": "", "code": "AFR", "iso2code": "A9", "name": "Africa"},
                {"id": "", "code": "ECS", "iso2code": "Z7", "name": "Europe & Central Asia"}
            ]
        ]);
        let page = envelope::decode::<Group>(body).unwrap();
        assert_eq!(page.records[1], Group::new("ECS", "Europe & Central Asia"));
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_list_countries_excludes_aggregates() {
        let client = WorldBankClient::new(crate::ClientSettings::default()).unwrap();
        let countries = client.list_countries().await.unwrap();
        println!("\n── countries ── {} results", countries.len());
        assert!(countries.iter().all(|c| !c.is_aggregate()));
        assert!(countries.iter().any(|c| c.id == "FIN"));
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_countries_in_region() {
        let client = WorldBankClient::new(crate::ClientSettings::default()).unwrap();
        let countries = client.list_countries_in_region("NAC").await.unwrap();
        for c in &countries {
            println!("  {} {} ({})", c.id, c.name, c.region.value);
        }
        assert!(countries.iter().any(|c| c.id == "USA"));
    }
}
