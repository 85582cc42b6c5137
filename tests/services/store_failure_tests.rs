//! Store interaction tests with mocked repositories.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use contacts_manager::application::services::{
    CountriesService, CountriesServiceImpl, CountryError, PersonError, PersonsService,
    PersonsServiceImpl,
};
use contacts_manager::domain::services::PersonCriteria;
use contacts_manager::domain::{Country, CountryRepository, Person, PersonRepository};
use contacts_manager::shared::error::AppError;

use crate::common::{country_request, person_request};

mock! {
    pub CountryRepo {}

    #[async_trait]
    impl CountryRepository for CountryRepo {
        async fn add_country(&self, country: &Country) -> Result<Country, AppError>;
        async fn get_all_countries(&self) -> Result<Vec<Country>, AppError>;
        async fn get_country_by_id(&self, id: Uuid) -> Result<Option<Country>, AppError>;
        async fn get_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError>;
    }
}

mock! {
    pub PersonRepo {}

    #[async_trait]
    impl PersonRepository for PersonRepo {
        async fn add_person(&self, person: &Person) -> Result<Person, AppError>;
        async fn get_all_persons(&self) -> Result<Vec<Person>, AppError>;
        async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>, AppError>;
        async fn get_filtered_persons(&self, criteria: &PersonCriteria) -> Result<Vec<Person>, AppError>;
        async fn update_person(&self, person: &Person) -> Result<Person, AppError>;
        async fn delete_person_by_id(&self, id: Uuid) -> Result<bool, AppError>;
    }
}

fn store_down() -> AppError {
    AppError::Internal("store unavailable".into())
}

#[tokio::test]
async fn test_add_country_inserts_exactly_once() {
    let mut repo = MockCountryRepo::new();
    repo.expect_get_country_by_name()
        .with(eq("Poland"))
        .times(1)
        .returning(|_| Ok(None));
    repo.expect_add_country()
        .times(1)
        .returning(|country| Ok(country.clone()));

    let service = CountriesServiceImpl::new(Arc::new(repo));
    let added = service.add_country(Some(country_request("Poland"))).await.unwrap();

    assert_eq!(added.name, "Poland");
    assert_ne!(added.id, Uuid::nil());
}

#[tokio::test]
async fn test_duplicate_country_never_inserts() {
    let mut repo = MockCountryRepo::new();
    repo.expect_get_country_by_name()
        .returning(|name| Ok(Some(Country::new(name))));
    repo.expect_add_country().never();

    let service = CountriesServiceImpl::new(Arc::new(repo));
    let err = service.add_country(Some(country_request("Poland"))).await.unwrap_err();

    assert!(matches!(err, CountryError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_country_store_error_propagates_unmodified() {
    let mut repo = MockCountryRepo::new();
    repo.expect_get_all_countries().returning(|| Err(store_down()));

    let service = CountriesServiceImpl::new(Arc::new(repo));
    let err = service.get_all_countries().await.unwrap_err();

    assert!(matches!(
        err,
        CountryError::Store(AppError::Internal(ref msg)) if msg == "store unavailable"
    ));
}

#[tokio::test]
async fn test_person_store_error_propagates_unmodified() {
    let mut persons = MockPersonRepo::new();
    persons.expect_add_person().returning(|_| Err(store_down()));
    let countries = MockCountryRepo::new();

    let service = PersonsServiceImpl::new(Arc::new(persons), Arc::new(countries));
    let err = service.add_person(Some(person_request("Mary"))).await.unwrap_err();

    assert!(matches!(err, PersonError::Store(AppError::Internal(_))));
    assert_eq!(AppError::from(err).to_string(), "Internal error: store unavailable");
}

#[tokio::test]
async fn test_invalid_person_never_reaches_store() {
    let mut persons = MockPersonRepo::new();
    persons.expect_add_person().never();
    let countries = MockCountryRepo::new();

    let service = PersonsServiceImpl::new(Arc::new(persons), Arc::new(countries));
    let mut request = person_request("Mary");
    request.email = Some("nope".into());

    let err = service.add_person(Some(request)).await.unwrap_err();

    assert!(matches!(err, PersonError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_delete_of_missing_person_skips_delete() {
    let mut persons = MockPersonRepo::new();
    persons.expect_get_person_by_id().returning(|_| Ok(None));
    persons.expect_delete_person_by_id().never();
    let countries = MockCountryRepo::new();

    let service = PersonsServiceImpl::new(Arc::new(persons), Arc::new(countries));

    assert!(!service.delete_person(Some(Uuid::new_v4())).await.unwrap());
}

#[tokio::test]
async fn test_listing_resolves_countries_with_one_call() {
    let poland = Country::new("Poland");
    let poland_id = poland.id;

    let mut persons = MockPersonRepo::new();
    persons.expect_get_all_persons().returning(move || {
        Ok((0..3)
            .map(|i| Person {
                id: Uuid::new_v4(),
                name: format!("Person {i}"),
                email: format!("p{i}@example.com"),
                date_of_birth: None,
                gender: None,
                country_id: Some(poland_id),
                address: None,
                receive_newsletters: false,
            })
            .collect())
    });
    let mut countries = MockCountryRepo::new();
    countries
        .expect_get_all_countries()
        .times(1)
        .returning(move || Ok(vec![poland.clone()]));
    countries.expect_get_country_by_id().never();

    let service = PersonsServiceImpl::new(Arc::new(persons), Arc::new(countries));
    let all = service.get_all_persons().await.unwrap();

    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|p| p.country.as_deref() == Some("Poland")));
}
