// tests/portal.rs
//
// Navigation from a county landing page to a ready search form.
mod common;

use case_scrape::error::ScrapeError;
use case_scrape::portal::{open_search_form, County};

use common::{fast_opts, home_page, FakePortal, SEARCH_FORM};

#[test]
fn every_county_reaches_the_search_form() {
    for county in County::ALL {
        let opts = fast_opts(county);
        let mut portal = FakePortal::new(county);
        open_search_form(&mut portal, county.config(), &opts.timeouts, &opts.retries).unwrap();
        assert_eq!(portal.current_url(), Some(SEARCH_FORM));
    }
}

#[test]
fn guadalupe_sets_search_by_defendant() {
    let opts = fast_opts(County::Guadalupe);
    let mut portal = FakePortal::new(County::Guadalupe);
    open_search_form(&mut portal, County::Guadalupe.config(), &opts.timeouts, &opts.retries).unwrap();
    assert_eq!(portal.form.get("SearchBy").map(String::as_str), Some("Defendant"));

    let mut comal = FakePortal::new(County::Comal);
    open_search_form(&mut comal, County::Comal.config(), &opts.timeouts, &opts.retries).unwrap();
    assert!(comal.form.get("SearchBy").is_none());
}

#[test]
fn missing_records_link_times_out_after_retries() {
    let county = County::Hays;
    let mut opts = fast_opts(county);
    opts.retries.nav_attempts = 3;

    let mut portal = FakePortal::new(county);
    let landing = home_page().replace("Criminal Case Records", "Jail Records");
    portal.page(county.config().search_url, landing);

    let err = open_search_form(&mut portal, county.config(), &opts.timeouts, &opts.retries).unwrap_err();
    assert!(err.is_timeout());
    assert!(!err.is_fatal());
    assert_eq!(portal.navigations, 1);
    assert_eq!(portal.reloads, 2);
}

#[test]
fn slow_landing_page_is_retried() {
    let county = County::Hays;
    let opts = fast_opts(county);

    let mut portal = FakePortal::new(county);
    portal.nav_timeouts = 1;
    open_search_form(&mut portal, county.config(), &opts.timeouts, &opts.retries).unwrap();

    assert_eq!(portal.navigations, 2);
    assert_eq!(portal.current_url(), Some(SEARCH_FORM));
}

#[test]
fn landing_page_that_never_loads_gives_up_after_nav_attempts() {
    let county = County::Williamson;
    let opts = fast_opts(county);

    let mut portal = FakePortal::new(county);
    portal.nav_timeouts = 10;
    let err = open_search_form(&mut portal, county.config(), &opts.timeouts, &opts.retries).unwrap_err();

    assert!(matches!(err, ScrapeError::NavigationTimeout(_)));
    assert!(err.is_timeout());
    assert_eq!(portal.navigations, opts.retries.nav_attempts);
}

#[test]
fn unsupported_county_is_fatal_configuration() {
    let err = "Travis".parse::<County>().unwrap_err();
    assert!(matches!(err, ScrapeError::Configuration(_)));
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "configuration: unsupported county 'Travis'");
}
