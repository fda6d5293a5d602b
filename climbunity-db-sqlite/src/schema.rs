///////////////////////////////////////////////////////////////////////
// Taxonomies
///////////////////////////////////////////////////////////////////////

// Styles and tags are label-keyed reference tables.

table! {
    styles (label) {
        label -> Text,
    }
}

table! {
    tags (label) {
        label -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        first_name -> Text,
        last_name -> Text,
        address -> Text,
        has_gear -> Bool,
        is_admin -> Bool,
    }
}

table! {
    user_styles (user_rowid, style_label) {
        user_rowid -> BigInt,
        style_label -> Text,
    }
}

joinable!(user_styles -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        address -> Text,
        opening_hours -> Nullable<Text>,
        description -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Routes
///////////////////////////////////////////////////////////////////////

table! {
    routes (rowid) {
        rowid -> BigInt,
        id -> Text,
        venue_rowid -> BigInt,
        setter_rowid -> Nullable<BigInt>,
        name -> Text,
        grade -> Text,
        photo -> Text,
        set_on -> Nullable<Text>,
        takedown_on -> Nullable<Text>,
    }
}

joinable!(routes -> venues (venue_rowid));
joinable!(routes -> users (setter_rowid));

table! {
    route_styles (route_rowid, style_label) {
        route_rowid -> BigInt,
        style_label -> Text,
    }
}

joinable!(route_styles -> routes (route_rowid));

table! {
    route_tags (route_rowid, tag_label) {
        route_rowid -> BigInt,
        tag_label -> Text,
    }
}

joinable!(route_tags -> routes (route_rowid));

table! {
    user_projects (user_rowid, route_rowid) {
        user_rowid -> BigInt,
        route_rowid -> BigInt,
    }
}

joinable!(user_projects -> users (user_rowid));
joinable!(user_projects -> routes (route_rowid));

///////////////////////////////////////////////////////////////////////
// Ascents
///////////////////////////////////////////////////////////////////////

table! {
    ascents (rowid) {
        rowid -> BigInt,
        id -> Text,
        route_rowid -> BigInt,
        user_rowid -> BigInt,
        sent_on -> Text,
        send_type -> SmallInt,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(ascents -> routes (route_rowid));
joinable!(ascents -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Appointments
///////////////////////////////////////////////////////////////////////

table! {
    appointments (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_by -> BigInt,
        venue_rowid -> BigInt,
        scheduled_at -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(appointments -> users (created_by));
joinable!(appointments -> venues (venue_rowid));

table! {
    appointment_attendants (appointment_rowid, user_rowid) {
        appointment_rowid -> BigInt,
        user_rowid -> BigInt,
    }
}

joinable!(appointment_attendants -> appointments (appointment_rowid));
joinable!(appointment_attendants -> users (user_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    appointments,
    appointment_attendants,
    ascents,
    routes,
    route_styles,
    route_tags,
    styles,
    tags,
    users,
    user_projects,
    user_styles,
    venues,
);
