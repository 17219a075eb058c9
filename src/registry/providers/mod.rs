pub mod docker_config;

pub use docker_config::DockerConfigProvider;
