//! Profile screen: view any user, edit your own, follow/unfollow others.

use api::models::{Profile as ProfileData, ProfileUpdate};
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_session, use_toasts, Avatar, ToastLevel};

use super::Shell;

fn refresh(user_id: String, mut profile: Signal<Option<ProfileData>>) {
    spawn(async move {
        let client = make_client();
        if let Ok(loaded) = client.profile(&user_id).await {
            profile.set(Some(loaded));
        }
    });
}

#[component]
pub fn Profile(user_id: String) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut profile = use_signal(|| Option::<ProfileData>::None);
    let mut editing = use_signal(|| false);
    let mut bio = use_signal(String::new);
    let mut work = use_signal(String::new);
    let mut education = use_signal(String::new);
    let mut city = use_signal(String::new);

    let is_own = session.current_user().map(|u| u.id) == Some(user_id.clone());

    let follow_id = user_id.clone();
    let save_id = user_id.clone();

    let _loader = use_resource(use_reactive!(|(user_id,)| async move {
        let client = make_client();
        match client.profile(&user_id).await {
            Ok(loaded) => {
                bio.set(loaded.user.bio.clone().unwrap_or_default());
                work.set(loaded.user.work.clone().unwrap_or_default());
                education.set(loaded.user.education.clone().unwrap_or_default());
                city.set(loaded.user.city.clone().unwrap_or_default());
                profile.set(Some(loaded));
            }
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
    }));

    let toggle_follow = move |_| {
        let follow_id = follow_id.clone();
        let following = profile().and_then(|p| p.connection_status).is_some();
        spawn(async move {
            let client = make_client();
            let result = if following {
                client.unfollow(&follow_id).await
            } else {
                client.follow(&follow_id).await
            };
            match result {
                Ok(()) => refresh(follow_id, profile),
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let save_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let save_id = save_id.clone();
        let update = ProfileUpdate {
            bio: Some(bio()),
            work: Some(work()),
            education: Some(education()),
            city: Some(city()),
            ..Default::default()
        };
        spawn(async move {
            let client = make_client();
            match client.update_profile(&update).await {
                Ok(()) => {
                    editing.set(false);
                    push_toast(&mut toasts, ToastLevel::Success, "Profile updated");
                    refresh(save_id, profile);
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "profile",
                match profile() {
                    None => rsx! {
                        div { class: "placeholder", "Loading profile..." }
                    },
                    Some(data) => rsx! {
                        div { class: "profile-header card",
                            if let Some(cover) = &data.user.cover_photo {
                                img { class: "profile-cover", src: "{cover}" }
                            }
                            Avatar { user: data.user.clone(), size: 96 }
                            h2 { "{data.user.name}" }
                            p { class: "profile-email", "{data.user.email}" }

                            if is_own {
                                button {
                                    class: "button button--ghost",
                                    onclick: move |_| editing.set(!editing()),
                                    if editing() { "Cancel" } else { "Edit profile" }
                                }
                            } else {
                                button {
                                    class: "button button--primary",
                                    onclick: toggle_follow,
                                    if data.connection_status.is_some() { "Unfollow" } else { "Follow" }
                                }
                            }
                        }

                        if editing() {
                            form { class: "profile-edit card", onsubmit: save_profile,
                                label { "Bio" }
                                textarea {
                                    value: bio(),
                                    oninput: move |evt| bio.set(evt.value()),
                                }
                                label { "Work" }
                                input {
                                    value: work(),
                                    oninput: move |evt| work.set(evt.value()),
                                }
                                label { "Education" }
                                input {
                                    value: education(),
                                    oninput: move |evt| education.set(evt.value()),
                                }
                                label { "City" }
                                input {
                                    value: city(),
                                    oninput: move |evt| city.set(evt.value()),
                                }
                                button { class: "button button--primary", r#type: "submit", "Save" }
                            }
                        } else {
                            div { class: "profile-details card",
                                if let Some(bio) = &data.user.bio {
                                    p { class: "profile-bio", "{bio}" }
                                }
                                if let Some(work) = &data.user.work {
                                    p { "Works at {work}" }
                                }
                                if let Some(education) = &data.user.education {
                                    p { "Studied at {education}" }
                                }
                                if let Some(city) = &data.user.city {
                                    p { "Lives in {city}" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
