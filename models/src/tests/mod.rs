mod create_droplet;
mod droplet;
