//! Guided environments and the routing from an environment id to a session.

pub mod playback;

use serde::Serialize;

/// A guided environment: looping scenery plus an ambient soundtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub id: u8,
    pub name: &'static str,
    /// Looping background video. Played muted; sound comes from `audio`.
    pub video: Option<&'static str>,
    pub audio: &'static str,
    /// Still image shown when there is no video and in the picker.
    pub image: &'static str,
}

pub const ENVIRONMENTS: &[Environment] = &[
    Environment {
        id: 1,
        name: "Forest Meadow",
        video: None,
        audio: "/Forest Meadow sound.mp3",
        image: "/lovable-uploads/748617aa-4040-41be-b7c8-f0f7ee20928e.png",
    },
    Environment {
        id: 2,
        name: "Snowy Garden",
        video: Some("/Zen Garden Video.mp4"),
        audio: "/Zen garden sound.mp3",
        image: "/lovable-uploads/b57d8d62-e588-4736-b270-b83356e82d3d.png",
    },
    Environment {
        id: 3,
        name: "Tropical Beach",
        video: None,
        audio: "/Lake sound.mp3",
        image: "/lovable-uploads/4e07f67f-896c-4899-91ce-eee9bf5b32ce.png",
    },
    Environment {
        id: 4,
        name: "Starry Night Campfire",
        video: Some("/Campfire Video.mp4"),
        audio: "/Campfire at night sound.mp3",
        image: "/lovable-uploads/780328a3-0b8b-4aa3-a1af-d61ce7fa6a47.png",
    },
    Environment {
        id: 6,
        name: "Cat Cafe",
        video: Some("/Cozy Cafe Video.mp4"),
        audio: "/Cafe Sound.mp3",
        image: "/lovable-uploads/5d39738b-cee2-4aeb-b213-58a4eed50438.png",
    },
    Environment {
        id: 7,
        name: "Lakeside Retreat",
        video: Some("/Lakeside Retreat Video.mp4"),
        audio: "/Lake sound.mp3",
        image: "/lovable-uploads/e5e6ddbd-8f7f-47b3-97ec-37cb07049f25.png",
    },
    Environment {
        id: 8,
        name: "Mountaintop Dawn",
        video: Some("/Mountain Sunrise Video.mp4"),
        audio: "/Forest Meadow sound.mp3",
        image: "/lovable-uploads/cd383841-bc09-4ef7-9a25-ef939e071f23.png",
    },
    Environment {
        id: 9,
        name: "Relaxing Spa",
        video: Some("/Spa Retreat Video.mp4"),
        audio: "/spa sound.mp3",
        image: "/lovable-uploads/acc2697c-41d0-48a5-9ea0-e71b200e34d0.png",
    },
    Environment {
        id: 10,
        name: "Verdant Greenhouse",
        video: None,
        audio: "/Greenhouse music.mp3",
        image: "/lovable-uploads/5b071dfe-e537-46ea-b5ef-2eb7374076c4.png",
    },
    Environment {
        id: 11,
        name: "Cozy Mountain Lodge",
        video: Some("/20250804_1720_Cozy Cabin Retreat_loop_01k1vsjx86fepajg9knasqfwqx.mp4"),
        audio: "/Cozy Cabin Retreat sound.mp3",
        image: "/lovable-uploads/64c38433-d24d-47ba-8bf7-ec4091688485.png",
    },
];

pub fn find(id: u8) -> Option<&'static Environment> {
    ENVIRONMENTS.iter().find(|env| env.id == id)
}

/// Where a navigation request lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Session(&'static Environment),
}

/// Resolve an environment id taken from a path segment.
///
/// Anything that is not a known id redirects home.
pub fn resolve_route(param: &str) -> Route {
    match param.trim().parse::<u8>().ok().and_then(find) {
        Some(env) => Route::Session(env),
        None => {
            tracing::debug!("Unknown environment '{}', redirecting home", param);
            Route::Home
        }
    }
}
