use super::*;

#[test]
fn role_homes_match_route_paths() {
    assert_eq!(Role::Admin.home_path(), Some(ADMIN_HOME_PATH));
    assert_eq!(Role::Farmer.home_path(), Some(FARMER_HOME_PATH));
    assert_eq!(Role::Worker.home_path(), Some(FARMER_HOME_PATH));
    assert_eq!(Role::None.home_path(), None);
}

#[test]
fn admin_pages_live_under_admin_home() {
    for path in [ADMIN_ALERTS_PATH, ADMIN_PLOTS_PATH, ADMIN_ML_METRICS_PATH] {
        assert!(path.starts_with(ADMIN_HOME_PATH), "{path}");
    }
}

#[test]
fn plot_path_appends_id() {
    assert_eq!(plot_path("7"), "/admin/plots/7");
}

#[test]
fn any_role_excludes_none() {
    assert!(!ANY_ROLE.contains(&Role::None));
    assert_eq!(ANY_ROLE.len(), 3);
}
