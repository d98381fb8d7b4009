//! Per-target deployment scaffolding.
//!
//! Each target contributes exactly one scaffold file set plus a tailored
//! `DEPLOY.md`. Scaffolds are plain text baked at export time; none of the
//! HTML/CSS/JS generation knows which target was picked.

use crate::target::DeploymentTarget;

/// One scaffold file to append to the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: &'static str,
    pub contents: String,
}

/// Returns the scaffold file set for a target, in archive order.
pub fn scaffold_files(target: DeploymentTarget) -> Vec<ScaffoldFile> {
    match target {
        DeploymentTarget::Vercel => vec![file("vercel.json", VERCEL_JSON)],
        DeploymentTarget::Netlify => vec![file("netlify.toml", NETLIFY_TOML)],
        DeploymentTarget::GithubPages => {
            vec![file(".github/workflows/deploy.yml", GITHUB_WORKFLOW)]
        }
        DeploymentTarget::Docker => {
            vec![file("Dockerfile", DOCKERFILE), file("nginx.conf", NGINX_CONF)]
        }
        DeploymentTarget::Vps => vec![file("nginx.conf", NGINX_CONF), file("setup.sh", VPS_SETUP)],
        DeploymentTarget::Heroku => vec![
            file("server.js", HEROKU_SERVER),
            file("Procfile", HEROKU_PROCFILE),
            file("package.json", HEROKU_PACKAGE),
        ],
    }
}

/// Renders the `DEPLOY.md` guide for a target.
pub fn deploy_doc(target: DeploymentTarget, site_name: &str) -> String {
    let steps = match target {
        DeploymentTarget::Vercel => {
            "1. Install the Vercel CLI: `npm i -g vercel`\n\
             2. From this folder run `vercel deploy --prod`\n\
             3. The included `vercel.json` serves the site with clean URLs.\n"
        }
        DeploymentTarget::Netlify => {
            "1. Install the Netlify CLI: `npm i -g netlify-cli`\n\
             2. From this folder run `netlify deploy --prod --dir .`\n\
             3. The included `netlify.toml` publishes this folder as-is.\n"
        }
        DeploymentTarget::GithubPages => {
            "1. Create a repository and push the contents of this folder.\n\
             2. In the repository settings, enable Pages with \"GitHub Actions\" as the source.\n\
             3. The included workflow at `.github/workflows/deploy.yml` publishes on every push to `main`.\n"
        }
        DeploymentTarget::Docker => {
            "1. Build the image: `docker build -t my-site .`\n\
             2. Run it: `docker run -p 8080:80 my-site`\n\
             3. The site is served by nginx using the included `nginx.conf`.\n"
        }
        DeploymentTarget::Vps => {
            "1. Copy this folder to your server, e.g. `/var/www/site`.\n\
             2. Review `nginx.conf` and link it into `/etc/nginx/conf.d/`.\n\
             3. Run `sh setup.sh` for a guided install, then `nginx -s reload`.\n"
        }
        DeploymentTarget::Heroku => {
            "1. Create an app: `heroku create`\n\
             2. Push this folder as a git repository; the included `Procfile`\n\
                starts the bundled static server (`server.js`).\n\
             3. Open the app: `heroku open`\n"
        }
    };

    format!(
        "# Deploying {site_name}\n\n\
         This folder is a self-contained static website: `index.html`,\n\
         `styles.css`, `app.js`, and `assets/`. `data.json` is a snapshot of\n\
         the source model for re-import; it is not needed at runtime.\n\n\
         ## {target}\n\n{steps}",
        target = target.as_str(),
    )
}

fn file(path: &'static str, contents: &str) -> ScaffoldFile {
    ScaffoldFile {
        path,
        contents: contents.to_string(),
    }
}

const VERCEL_JSON: &str = r#"{
  "cleanUrls": true,
  "trailingSlash": false,
  "headers": [
    {
      "source": "/assets/(.*)",
      "headers": [
        { "key": "Cache-Control", "value": "public, max-age=31536000, immutable" }
      ]
    }
  ]
}
"#;

const NETLIFY_TOML: &str = r#"[build]
publish = "."

[[headers]]
for = "/assets/*"

[headers.values]
Cache-Control = "public, max-age=31536000, immutable"
"#;

const GITHUB_WORKFLOW: &str = r#"name: Deploy to GitHub Pages

on:
  push:
    branches: [main]
  workflow_dispatch:

permissions:
  contents: read
  pages: write
  id-token: write

concurrency:
  group: pages
  cancel-in-progress: true

jobs:
  deploy:
    runs-on: ubuntu-latest
    environment:
      name: github-pages
      url: ${{ steps.deployment.outputs.page_url }}
    steps:
      - uses: actions/checkout@v4
      - uses: actions/configure-pages@v5
      - uses: actions/upload-pages-artifact@v3
        with:
          path: .
      - id: deployment
        uses: actions/deploy-pages@v4
"#;

const DOCKERFILE: &str = r#"FROM nginx:alpine

COPY nginx.conf /etc/nginx/conf.d/default.conf
COPY . /usr/share/nginx/html

EXPOSE 80
"#;

const NGINX_CONF: &str = r#"server {
    listen 80;
    server_name _;

    root /usr/share/nginx/html;
    index index.html;

    location /assets/ {
        add_header Cache-Control "public, max-age=31536000, immutable";
    }

    location / {
        try_files $uri $uri/ /index.html;
    }
}
"#;

const VPS_SETUP: &str = r#"#!/bin/sh
# Copies the site into the web root and installs the nginx config.
set -eu

WEB_ROOT="${WEB_ROOT:-/var/www/site}"
NGINX_CONF_DIR="${NGINX_CONF_DIR:-/etc/nginx/conf.d}"

mkdir -p "$WEB_ROOT"
cp -R index.html styles.css app.js assets "$WEB_ROOT"/
cp nginx.conf "$NGINX_CONF_DIR/site.conf"

echo "Installed to $WEB_ROOT. Reload nginx with: nginx -s reload"
"#;

const HEROKU_SERVER: &str = r#"// Minimal static file server for platforms that expect a web process.
const http = require('http');
const fs = require('fs');
const path = require('path');

const PORT = process.env.PORT || 8080;
const ROOT = __dirname;
const TYPES = {
  '.html': 'text/html; charset=utf-8',
  '.css': 'text/css; charset=utf-8',
  '.js': 'application/javascript; charset=utf-8',
  '.json': 'application/json',
  '.png': 'image/png',
  '.jpg': 'image/jpeg',
  '.gif': 'image/gif',
  '.webp': 'image/webp',
  '.svg': 'image/svg+xml',
  '.avif': 'image/avif'
};

http.createServer(function (req, res) {
  const urlPath = decodeURIComponent(req.url.split('?')[0]);
  let filePath = path.normalize(path.join(ROOT, urlPath));
  if (!filePath.startsWith(ROOT)) {
    res.writeHead(403);
    res.end();
    return;
  }
  if (urlPath === '/' || !path.extname(filePath)) {
    filePath = path.join(ROOT, 'index.html');
  }
  fs.readFile(filePath, function (err, data) {
    if (err) {
      res.writeHead(404, { 'Content-Type': 'text/plain' });
      res.end('Not found');
      return;
    }
    res.writeHead(200, { 'Content-Type': TYPES[path.extname(filePath)] || 'application/octet-stream' });
    res.end(data);
  });
}).listen(PORT);
"#;

const HEROKU_PROCFILE: &str = "web: node server.js\n";

const HEROKU_PACKAGE: &str = r#"{
  "name": "gridbio-site",
  "private": true,
  "scripts": {
    "start": "node server.js"
  }
}
"#;
